pub mod catalog;
pub mod config;
pub mod snapshot;

pub use catalog::{
    CatalogObject, CatalogSnapshot, CategoryData, CategoryObject, ImageData, ImageObject,
    InventoryCount, ItemData, ItemObject, ItemVariation, ItemVariationData, Money,
};
pub use config::{load_feed_config, FeedConfig};
pub use snapshot::{load_snapshot, SnapshotError};
