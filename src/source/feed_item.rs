//! The entry type shared by every feed source.
//!
//! `FeedItem` is one entry from a polled feed, normalised so the filter and
//! notifier stages never need to know which feed format produced it.

use chrono::{DateTime, Utc};

/// A single feed entry.
///
/// Items are transient: they are built fresh on every run and dropped when
/// the process exits, so there is no identity key for de-duplication.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeedItem {
    /// Entry headline.
    pub title: String,

    /// First author listed on the entry (the channel name for YouTube).
    /// Empty when the feed names nobody.
    pub author: String,

    /// URL of the content. Empty when the entry carries no link.
    pub link: String,

    /// Publication timestamp in UTC.
    ///
    /// `None` means the feed gave neither a published nor an updated date.
    /// Such items cannot be placed in the lookback window.
    pub published: Option<DateTime<Utc>>,

    /// Identifier of the source this came from (e.g. a channel id).
    pub source_id: String,
}

impl FeedItem {
    /// Whether the link contains `marker` (e.g. `/shorts/`).
    pub fn link_contains(&self, marker: &str) -> bool {
        !marker.is_empty() && self.link.contains(marker)
    }
}
