//! Recency and short-form filtering.
//!
//! Turns the raw items from every source into one list of [`Candidate`]s,
//! oldest first.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::source::FeedItem;

/// A feed item that passed filtering, paired with its publication time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub item: FeedItem,
    pub published: DateTime<Utc>,
}

/// Which items count as new.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Items published before this instant are dropped.
    pub cutoff: DateTime<Utc>,
    /// Items whose link contains this are dropped regardless of date.
    pub exclude: String,
}

impl Filter {
    /// A filter keeping items published within `lookback` of `now`.
    pub fn new(now: DateTime<Utc>, lookback: Duration, exclude: impl Into<String>) -> Self {
        Self {
            cutoff: now - lookback,
            exclude: exclude.into(),
        }
    }

    /// Apply the filter to `item`.
    pub fn accept(&self, item: FeedItem) -> Option<Candidate> {
        if item.link_contains(&self.exclude) {
            debug!(link = %item.link, "skipping short-form entry");
            return None;
        }
        let Some(published) = item.published else {
            debug!(title = %item.title, source = %item.source_id, "skipping undated entry");
            return None;
        };
        if published < self.cutoff {
            return None;
        }
        Some(Candidate { item, published })
    }

    /// Filter every item and sort the survivors oldest first.
    ///
    /// The sort is stable, so items with equal timestamps keep the order in
    /// which the sources produced them.
    pub fn collect(&self, items: impl IntoIterator<Item = FeedItem>) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = items.into_iter().filter_map(|i| self.accept(i)).collect();
        candidates.sort_by_key(|c| c.published);
        candidates
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
