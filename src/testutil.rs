//! A scripted one-request-per-connection HTTP responder for tests.
//!
//! Each [`Reply`] answers exactly one incoming connection, in order. Replies
//! always close the connection so the client never reuses it.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A request as seen by the responder.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// How to answer one connection.
pub struct Reply {
    status: u16,
    body: String,
    hang: Option<Duration>,
}

impl Reply {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            hang: None,
        }
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Read the request, then say nothing for `d` before closing.
    pub fn hang(d: Duration) -> Self {
        Self {
            status: 0,
            body: String::new(),
            hang: Some(d),
        }
    }
}

pub struct Server {
    addr: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl Server {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Wait for every scripted reply to be served and return the requests.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().unwrap()
    }
}

pub fn serve(replies: Vec<Reply>) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for reply in replies {
            let (stream, _) = listener.accept().unwrap();
            seen.push(answer(stream, reply));
        }
        seen
    });

    Server { addr, handle }
}

fn answer(mut stream: TcpStream, reply: Reply) -> Recorded {
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();

    if let Some(d) = reply.hang {
        thread::sleep(d);
    } else {
        let response = format!(
            "HTTP/1.1 {} Scripted\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            reply.status,
            reply.body.len(),
            reply.body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    }

    Recorded {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}
