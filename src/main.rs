//! feed-notify: post recent YouTube uploads to a Discord webhook.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ FeedItem ┌───────────┐ Candidate ┌───────────┐  POST
//! │ poll.rs  │ ───────► │ filter.rs │ ────────► │ notify.rs │ ──────► webhook
//! │ (fetch)  │          │ (window)  │ (sorted)  │ (pacing)  │
//! └──────────┘          └───────────┘           └───────────┘
//! ```
//!
//! * **`source/`**: the `DataSource` trait and the YouTube channel feed.
//! * **`poll`**: fetches every source once; failures skip that source.
//! * **`filter`**: lookback window, short-form exclusion, oldest-first sort.
//! * **`notify`**: message template, webhook delivery, pacing.
//! * **`app`**: runs the three stages in order and counts outcomes.
//! * **`config`**: command-line flags turned into an immutable `Config`.
//!
//! This is a batch job: it runs once and exits with status 0 whatever the
//! network did. Schedule it (cron, systemd timer) at the lookback interval.

mod app;
mod config;
mod filter;
mod notify;
mod poll;
mod source;
#[cfg(test)]
mod testutil;

use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use config::{Cli, Config};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::from(Cli::parse());
    info!(
        channels = config.channels.len(),
        lookback_minutes = config.lookback_minutes(),
        "starting run"
    );

    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %format!("{e:#}"), "could not start run");
            return;
        }
    };
    let summary = app.run(Utc::now());

    info!(
        sources = summary.sources,
        sources_failed = summary.sources_failed,
        entries = summary.entries,
        candidates = summary.candidates,
        sent = summary.sent,
        failed = summary.failed,
        "run complete"
    );
}
