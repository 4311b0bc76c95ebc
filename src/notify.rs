//! Message formatting and webhook delivery.
//!
//! Upload times are rendered in UTC and labelled as such.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::filter::Candidate;

/// Outcome of one delivery attempt. There is no retry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

/// Something that can deliver a formatted message.
pub trait Notifier {
    /// Attempt delivery once. Failures are logged by the implementation and
    /// reported as [`Delivery::Failed`].
    fn send(&self, message: &str) -> Delivery;
}

/// Pause applied after every delivery attempt, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    None,
    Fixed(Duration),
}

impl Pacing {
    pub fn wait(&self) {
        if let Pacing::Fixed(d) = self {
            if !d.is_zero() {
                thread::sleep(*d);
            }
        }
    }
}

/// Render the message for `candidate`.
pub fn format_message(candidate: &Candidate) -> String {
    let item = &candidate.item;
    format!(
        "**{}**\n**Creator:** {}\n**Link:** {}\n**Uploaded:** {}",
        item.title,
        item.author,
        item.link,
        candidate.published.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

#[derive(Serialize)]
struct Payload<'a> {
    content: &'a str,
}

/// Posts messages to a Discord-style webhook as `{"content": ...}`.
pub struct WebhookNotifier {
    url: String,
    client: Client,
}

impl WebhookNotifier {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    fn post(&self, message: &str) -> Result<()> {
        self.client
            .post(&self.url)
            .json(&Payload { content: message })
            .send()
            .context("request failed")?
            .error_for_status()?;
        Ok(())
    }
}

impl Notifier for WebhookNotifier {
    fn send(&self, message: &str) -> Delivery {
        match self.post(message) {
            Ok(()) => {
                info!("message sent");
                Delivery::Sent
            }
            Err(e) => {
                error!(error = %format!("{e:#}"), "error sending to webhook");
                Delivery::Failed
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
