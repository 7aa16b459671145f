//! Catalog snapshot types for the persisted Square export.
//!
//! ## Observed shape from the live Square catalog
//!
//! ### Heterogeneous object list
//! Square returns items, images and categories interleaved in one array,
//! discriminated by a SCREAMING_SNAKE_CASE `type` field. The fetch job
//! persists that array as-is, so the snapshot also carries object types the
//! feed never consumes (`TAX`, `DISCOUNT`, `MODIFIER_LIST`, ...). These must
//! deserialize without error and contribute nothing, hence the
//! `#[serde(other)]` catch-all variant.
//!
//! ### `product_type`
//! Absent on older catalog entries; Square treats absence as `"REGULAR"`.
//! Non-merchandise entries carry values like `"EVENT"`,
//! `"APPOINTMENTS_SERVICE"` or `"LEGACY_SQUARE_ONLINE_SERVICE"`.
//!
//! ### Inventory quantities
//! `quantity` is a **decimal string**, not a number (Square supports
//! fractional stock for weighed goods). One row is returned per
//! (object, location) pair, so the same `catalog_object_id` appears once per
//! stock location and quantities have to be summed, never overwritten.
//!
//! ### Money
//! Prices are integer minor units (cents) plus an ISO 4217 currency code.
//! Variations without a configured price omit `price_money` entirely.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An already-materialized catalog export, handed over by the scheduled
/// fetch job. The pipeline never talks to the Square API itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSnapshot {
    /// When the fetch job pulled this snapshot from Square.
    pub fetched_at: DateTime<Utc>,
    /// All catalog objects, in API order.
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
    /// One row per (catalog object, stock location).
    #[serde(default)]
    pub inventory_counts: Vec<InventoryCount>,
}

/// A single record from the Square catalog, discriminated by its `type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogObject {
    Item(ItemObject),
    Image(ImageObject),
    Category(CategoryObject),
    /// Any object type the feed does not consume.
    #[serde(other)]
    Other,
}

/// A sellable product concept; variations are embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemObject {
    pub id: String,
    #[serde(default)]
    pub is_deleted: bool,
    /// Absent on tombstoned records.
    #[serde(default)]
    pub item_data: Option<ItemData>,
}

/// Item-level fields shared by all variations of the item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Gallery image ids; the first one is the storefront primary image.
    #[serde(default)]
    pub image_ids: Vec<String>,
    /// Category memberships in merchant-configured order. Order matters for
    /// brand derivation: the first brand-category membership wins.
    #[serde(default)]
    pub category_ids: Vec<String>,
    /// The single category Square reports the item under.
    #[serde(default)]
    pub reporting_category_id: Option<String>,
    /// `"REGULAR"` for merchandise. Defaults to `"REGULAR"` when absent,
    /// matching Square's own interpretation.
    #[serde(default = "default_product_type")]
    pub product_type: String,
    #[serde(default)]
    pub is_archived: bool,
    /// Canonical Square Online product page URL, when the item is published.
    #[serde(default)]
    pub ecom_url: Option<String>,
    #[serde(default)]
    pub variations: Vec<ItemVariation>,
}

/// A purchasable SKU of an item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemVariation {
    pub id: String,
    #[serde(default)]
    pub item_variation_data: Option<ItemVariationData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemVariationData {
    /// Variation display name, e.g. a colour/weight combination. Often equal
    /// to the parent item name for single-variation items.
    #[serde(default)]
    pub name: Option<String>,
    /// Absent when the merchant never set a price (e.g. "variable" pricing).
    #[serde(default)]
    pub price_money: Option<Money>,
}

/// An amount of money in integer minor units.
#[derive(Debug, Clone, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// A catalog image with its CDN URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageObject {
    pub id: String,
    #[serde(default)]
    pub image_data: Option<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
}

/// A node in the merchant's category tree.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryObject {
    pub id: String,
    #[serde(default)]
    pub category_data: Option<CategoryData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub name: Option<String>,
    /// Parent link; the tree is a forest, root categories omit this.
    #[serde(default)]
    pub parent_category_id: Option<String>,
}

/// Tracked stock for one catalog object at one location.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryCount {
    pub catalog_object_id: String,
    /// Decimal string, e.g. `"3"` or `"1.5"`. Malformed values are treated
    /// as zero downstream, never as an error.
    #[serde(default)]
    pub quantity: String,
}

/// Default for `ItemData::product_type` when the field is absent.
///
/// Serde's `default = "..."` attribute expects a function path; `"REGULAR"`
/// mirrors how Square interprets a missing `product_type`.
fn default_product_type() -> String {
    "REGULAR".to_string()
}
