//! YouTube channel feed source.
//!
//! Every channel publishes an Atom document at
//! `https://www.youtube.com/feeds/videos.xml?channel_id=<id>`. The base URL is
//! configurable so the same source can point at a mirror or a test server.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use super::{DataSource, FeedItem};

/// One polled channel.
pub struct ChannelFeed {
    /// Channel identifier, appended as the `channel_id` query parameter.
    pub channel_id: String,
    base_url: String,
    client: Client,
}

impl ChannelFeed {
    /// Create a source for `channel_id` under `base_url`.
    ///
    /// The client is shared between sources; its timeout bounds each fetch.
    pub fn new(client: Client, base_url: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            base_url: base_url.into(),
            client,
        }
    }

    /// The feed URL for this channel.
    pub fn feed_url(&self) -> Result<Url> {
        Url::parse_with_params(&self.base_url, [("channel_id", self.channel_id.as_str())])
            .with_context(|| format!("invalid feed base url {:?}", self.base_url))
    }

    /// Parse an already-fetched feed body into [`FeedItem`]s.
    ///
    /// Pure (no I/O) so tests can exercise it directly. A document the parser
    /// rejects yields no items rather than an error.
    pub fn parse_feed(body: &[u8], source_id: &str) -> Vec<FeedItem> {
        let feed = match feed_rs::parser::parse(body) {
            Ok(feed) => feed,
            Err(e) => {
                warn!(source = %source_id, error = %e, "unparseable feed document");
                return Vec::new();
            }
        };

        feed.entries
            .into_iter()
            .map(|entry| {
                // Prefer the alternate link (the watch page), then whatever comes first.
                let link = entry
                    .links
                    .iter()
                    .find(|l| l.rel.as_deref() == Some("alternate"))
                    .or_else(|| entry.links.first())
                    .map(|l| l.href.clone())
                    .unwrap_or_default();

                FeedItem {
                    title: entry
                        .title
                        .map(|t| t.content)
                        .unwrap_or_else(|| "(untitled)".to_string()),
                    author: entry
                        .authors
                        .into_iter()
                        .next()
                        .map(|p| p.name)
                        .unwrap_or_default(),
                    link,
                    published: entry.published.or(entry.updated),
                    source_id: source_id.to_string(),
                }
            })
            .collect()
    }
}

impl DataSource for ChannelFeed {
    fn id(&self) -> &str {
        &self.channel_id
    }

    fn fetch(&self) -> Result<Vec<FeedItem>> {
        let url = self.feed_url()?;
        debug!(source = %self.channel_id, %url, "fetching feed");

        let body = self
            .client
            .get(url)
            .send()
            .context("request failed")?
            .error_for_status()?
            .bytes()
            .context("reading feed body")?;

        Ok(Self::parse_feed(&body, &self.channel_id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
