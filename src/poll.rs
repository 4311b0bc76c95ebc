//! Feed collection.
//!
//! Fetches every configured source once, in order, on the calling thread. A
//! source that fails is logged and skipped; it never stops the others.

use tracing::{info, warn};

use crate::source::{DataSource, FeedItem};

/// Everything gathered from one pass over the sources.
#[derive(Debug, Default)]
pub struct Collected {
    /// Items from every source that fetched successfully, in source order.
    pub items: Vec<FeedItem>,
    /// Ids of sources whose fetch failed.
    pub failed: Vec<String>,
}

/// Fetch all sources sequentially.
pub fn collect(sources: &[Box<dyn DataSource>]) -> Collected {
    let mut out = Collected::default();

    for src in sources {
        match src.fetch() {
            Ok(items) => {
                info!(source = %src.id(), count = items.len(), "fetched feed");
                out.items.extend(items);
            }
            Err(e) => {
                warn!(source = %src.id(), error = %format!("{e:#}"), "error fetching feed");
                out.failed.push(src.id().to_string());
            }
        }
    }

    out
}
