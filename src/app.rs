//! One complete run: collect, filter, notify.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use tracing::info;

use crate::config::Config;
use crate::filter::Filter;
use crate::notify::{format_message, Delivery, Notifier, WebhookNotifier};
use crate::poll;
use crate::source::{ChannelFeed, DataSource};

/// Counters describing what a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: usize,
    pub sources_failed: usize,
    pub entries: usize,
    pub candidates: usize,
    pub sent: usize,
    pub failed: usize,
}

pub struct App {
    config: Config,
    sources: Vec<Box<dyn DataSource>>,
    notifier: Box<dyn Notifier>,
}

impl App {
    pub fn new(config: Config, sources: Vec<Box<dyn DataSource>>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            config,
            sources,
            notifier,
        }
    }

    /// Wire up the real channel feeds and webhook from `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;

        // Client is an Arc internally; clones share one connection pool.
        let sources = config
            .channels
            .iter()
            .map(|id| {
                Box::new(ChannelFeed::new(client.clone(), &config.feed_base_url, id)) as Box<dyn DataSource>
            })
            .collect();
        let notifier = Box::new(WebhookNotifier::new(client, &config.webhook_url));

        Ok(Self::new(config, sources, notifier))
    }

    /// Run every stage once, treating `now` as the current time.
    ///
    /// Never fails: fetch and delivery errors are logged and counted.
    pub fn run(&self, now: DateTime<Utc>) -> RunSummary {
        let collected = poll::collect(&self.sources);
        let mut summary = RunSummary {
            sources: self.sources.len(),
            sources_failed: collected.failed.len(),
            entries: collected.items.len(),
            ..RunSummary::default()
        };

        let filter = Filter::new(now, self.config.lookback, &self.config.exclude);
        let candidates = filter.collect(collected.items);
        summary.candidates = candidates.len();

        if candidates.is_empty() {
            info!(
                "no new entries found in the last {} minutes",
                self.config.lookback_minutes()
            );
            return summary;
        }

        for candidate in &candidates {
            info!(title = %candidate.item.title, source = %candidate.item.source_id, "sending");
            match self.notifier.send(&format_message(candidate)) {
                Delivery::Sent => summary.sent += 1,
                Delivery::Failed => summary.failed += 1,
            }
            self.config.pacing.wait();
        }

        summary
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
