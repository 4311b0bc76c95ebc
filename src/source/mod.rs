//! Feed source abstraction layer.
//!
//! This module defines the [`DataSource`] trait and the common [`FeedItem`]
//! type. Concrete sources live in sub-modules (currently only
//! [`youtube`]).
//!
//! ## Adding a new source
//!
//! 1. Create a new file in this directory (e.g. `podcast.rs`).
//! 2. Define a struct and implement [`DataSource`] for it.
//! 3. Add `mod podcast;` below and re-export the struct.
//! 4. Construct instances in `App::from_config`.
//!
//! The collector, filter and notifier are all source-agnostic.

mod feed_item;
mod youtube;

pub use feed_item::FeedItem;
pub use youtube::ChannelFeed;

#[cfg(test)]
pub(crate) use feed_item::tests::make_item;

use anyhow::Result;

/// Trait that every feed source implements.
///
/// The collector calls [`fetch()`](DataSource::fetch) exactly once per run.
/// An `Err` means the whole source is skipped for this run; it never aborts
/// the run itself.
pub trait DataSource {
    /// Identifier used in log lines and stamped on every item.
    fn id(&self) -> &str;

    /// Fetch and parse the current feed document.
    fn fetch(&self) -> Result<Vec<FeedItem>>;
}
