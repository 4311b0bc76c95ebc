//! Command-line surface and the run configuration built from it.
//!
//! Every option has a default, so running with no arguments polls the
//! built-in channel list with a five minute window.

use std::time::Duration;

use clap::Parser;

use crate::notify::Pacing;

/// Channels polled when none are given on the command line.
pub const DEFAULT_CHANNEL_IDS: [&str; 11] = [
    "UCZXW8E1__d5tZb-wLFOt8TQ",
    "UCSUf5_EPEfl4zlBKZHkZdmw",
    "UCMr1lqB1oN3-cYf6cj6-v-A",
    "UCU2fTtyIj4uJ0uYlQnEH3LA",
    "UCU2fTtyIj4uJ0uYlQnEH3LA",
    "UCXuqSBlHAE6Xw-yeJA0Tunw",
    "UCCC4-ZHzMHUKNyDENY7Pk6Q",
    "UC-lHJZR3Gqxm24_Vd_AJ5Yw",
    "UCzgCuuPQa1nMlZP9ruPYDNw",
    "UCfogw3upPjt7ht4d3DpMSHw",
    "UCwxJalZcDrdG_IMdTE5IIhw",
];

pub const DEFAULT_FEED_BASE_URL: &str = "https://www.youtube.com/feeds/videos.xml";

/// Post recent uploads from a set of YouTube channels to a webhook.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Webhook receiving one message per new upload
    #[arg(long, env = "WEBHOOK_URL", default_value = "your_discord_webhook_url_here")]
    pub webhook_url: String,

    /// Channel id to poll (repeatable or comma separated)
    #[arg(long = "channel", value_delimiter = ',', default_values = DEFAULT_CHANNEL_IDS)]
    pub channels: Vec<String>,

    /// Only entries published within this many minutes are sent
    #[arg(long, default_value_t = 5)]
    pub lookback_minutes: u32,

    /// Timeout for each feed fetch and each webhook post, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Pause after every webhook post, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pacing_ms: u64,

    /// Feed endpoint; the channel id is appended as `channel_id`
    #[arg(long, default_value = DEFAULT_FEED_BASE_URL)]
    pub feed_base_url: String,

    /// Entries whose link contains this are never sent
    #[arg(long, default_value = "/shorts/")]
    pub exclude: String,
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub channels: Vec<String>,
    pub lookback: chrono::Duration,
    pub timeout: Duration,
    pub pacing: Pacing,
    pub feed_base_url: String,
    pub exclude: String,
}

impl Config {
    /// Lookback window in whole minutes, for log lines.
    pub fn lookback_minutes(&self) -> i64 {
        self.lookback.num_minutes()
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let pacing = if cli.pacing_ms == 0 {
            Pacing::None
        } else {
            Pacing::Fixed(Duration::from_millis(cli.pacing_ms))
        };

        Self {
            webhook_url: cli.webhook_url,
            channels: cli.channels,
            lookback: chrono::Duration::minutes(i64::from(cli.lookback_minutes)),
            timeout: Duration::from_secs(cli.timeout_secs),
            pacing,
            feed_base_url: cli.feed_base_url,
            exclude: cli.exclude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::from(Cli::parse_from(["feed-notify"]));

        assert_eq!(config.channels, DEFAULT_CHANNEL_IDS);
        assert_eq!(config.lookback_minutes(), 5);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.pacing, Pacing::Fixed(Duration::from_secs(1)));
        assert_eq!(config.feed_base_url, DEFAULT_FEED_BASE_URL);
        assert_eq!(config.exclude, "/shorts/");
    }

    #[test]
    fn duplicate_default_channel_is_kept() {
        let cli = Cli::parse_from(["feed-notify"]);
        let dupes = cli
            .channels
            .iter()
            .filter(|c| *c == "UCU2fTtyIj4uJ0uYlQnEH3LA")
            .count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn channels_from_flags() {
        let cli = Cli::parse_from([
            "feed-notify",
            "--channel",
            "UCa,UCb",
            "--channel",
            "UCc",
            "--lookback-minutes",
            "60",
            "--pacing-ms",
            "0",
            "--webhook-url",
            "https://discord.com/api/webhooks/1/x",
        ]);
        let config = Config::from(cli);

        assert_eq!(config.channels, ["UCa", "UCb", "UCc"]);
        assert_eq!(config.lookback_minutes(), 60);
        assert_eq!(config.pacing, Pacing::None);
        assert_eq!(config.webhook_url, "https://discord.com/api/webhooks/1/x");
    }
}
