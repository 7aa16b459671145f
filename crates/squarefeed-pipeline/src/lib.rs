//! The product feed pipeline: Square catalog snapshot in, shopping-feed TSV
//! out.
//!
//! Three stages, each pure over its inputs:
//! 1. [`index`] builds lookup tables from the heterogeneous object list.
//! 2. [`aggregate`] folds variations into one record per sellable item.
//! 3. [`encode`] maps eligible records onto the Google Merchant row schema
//!    and serializes them.
//!
//! Nothing in here is fatal: malformed or missing upstream data degrades to
//! absent fields or excluded items, and an empty catalog encodes as just the
//! header line.

pub mod aggregate;
pub mod encode;
pub mod index;
mod name;
#[cfg(test)]
mod testutil;

use squarefeed_core::{CatalogSnapshot, FeedConfig};

pub use aggregate::{aggregate, AggregatedItem};
pub use encode::{encode_feed, Availability, GoogleProduct, FEED_COLUMNS};
pub use index::CatalogIndex;

/// Runs the full pipeline over one snapshot.
///
/// All intermediate state (indices, the aggregation map) is built, used and
/// discarded within this call; nothing carries over between runs.
#[must_use]
pub fn generate_feed(snapshot: &CatalogSnapshot, config: &FeedConfig) -> String {
    let catalog_index = CatalogIndex::build(snapshot);
    let items = aggregate(snapshot, &catalog_index, config);
    encode_feed(&items, config)
}
