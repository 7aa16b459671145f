//! Mapping aggregated items onto the Google Merchant row schema and
//! serializing the feed.
//!
//! The output is deliberately primitive: a fixed 11-column header line plus
//! one tab-joined line per product, no quoting mechanism. Any delimiter
//! byte inside a field value is substituted with a space before joining.

use serde::Serialize;
use squarefeed_core::FeedConfig;

use crate::aggregate::AggregatedItem;

/// Column order is part of the contract with the advertising platform.
pub const FEED_COLUMNS: [&str; 11] = [
    "id",
    "title",
    "description",
    "link",
    "image_link",
    "availability",
    "price",
    "condition",
    "brand",
    "mpn",
    "product_type",
];

/// Stock state in Google Merchant vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
    Preorder,
}

impl Availability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Preorder => "preorder",
        }
    }
}

/// One row of the shopping feed.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleProduct {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_link: String,
    pub availability: Availability,
    /// `"<amount to 2dp> <currency>"`, e.g. `"22.00 AUD"`.
    pub price: String,
    /// Always `"new"`; the shop sells no second-hand stock.
    pub condition: String,
    pub brand: Option<String>,
    /// Never set: an MPN would vary per variation, not per aggregated item.
    pub mpn: Option<String>,
    pub product_type: Option<String>,
}

impl GoogleProduct {
    /// Maps an aggregated item onto the row schema.
    ///
    /// The out-of-stock branch is unreachable through [`encode_feed`] (which
    /// filters zero-stock items first) but is implemented for standalone
    /// use. Missing link/image map to empty strings for the same reason.
    #[must_use]
    pub fn from_aggregated(item: &AggregatedItem, config: &FeedConfig) -> Self {
        let description = if item.description.is_empty() {
            item.name.clone()
        } else {
            item.description.clone()
        };
        let availability = if item.total_quantity > 0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        };
        Self {
            id: item.item_id.clone(),
            title: item.name.clone(),
            description,
            link: item.product_url.clone().unwrap_or_default(),
            image_link: item.image_url.clone().unwrap_or_default(),
            availability,
            price: format_price(item.min_price.unwrap_or(0), &item.currency),
            condition: "new".to_string(),
            brand: item.brand.clone().or_else(|| config.default_brand.clone()),
            mpn: None,
            product_type: item.category.clone(),
        }
    }

    /// Tab-joined field values in [`FEED_COLUMNS`] order; absent fields
    /// serialize as empty strings.
    #[must_use]
    pub fn row(&self) -> String {
        let fields: [&str; 11] = [
            &self.id,
            &self.title,
            &self.description,
            &self.link,
            &self.image_link,
            self.availability.as_str(),
            &self.price,
            &self.condition,
            self.brand.as_deref().unwrap_or(""),
            self.mpn.as_deref().unwrap_or(""),
            self.product_type.as_deref().unwrap_or(""),
        ];
        fields
            .iter()
            .map(|field| sanitize_field(field))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Serializes the feed: header line plus one row per item that passes the
/// encode-time filters (resolvable link, resolvable image, stock on hand).
/// Lines are joined by `\n` with no trailing newline; an empty catalog
/// yields exactly the header.
#[must_use]
pub fn encode_feed(items: &[AggregatedItem], config: &FeedConfig) -> String {
    let mut lines = vec![FEED_COLUMNS.join("\t")];
    for item in items {
        if !is_feed_eligible(item) {
            tracing::debug!(item_id = %item.item_id, "skipping feed-ineligible item");
            continue;
        }
        lines.push(GoogleProduct::from_aggregated(item, config).row());
    }
    lines.join("\n")
}

/// Encode-time eligibility, distinct from aggregation-stage eligibility:
/// items with no product link or image cannot be advertised, and strictly
/// out-of-stock items are never published.
fn is_feed_eligible(item: &AggregatedItem) -> bool {
    let has_link = item.product_url.as_deref().is_some_and(|url| !url.is_empty());
    let has_image = item.image_url.as_deref().is_some_and(|url| !url.is_empty());
    has_link && has_image && item.total_quantity > 0
}

/// Minor units to `"<units>.<cents> <currency>"` at a fixed two decimals.
/// Assumes a 2-decimal currency; fine for the shop's single-currency (AUD)
/// catalog.
fn format_price(minor_units: i64, currency: &str) -> String {
    format!("{}.{:02} {currency}", minor_units / 100, minor_units % 100)
}

/// Replaces every tab, newline and carriage-return byte with one space so a
/// value can never smuggle a delimiter into the output.
fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
