//! Folding catalog items and their variations into one record per sellable
//! item.
//!
//! Items are processed in snapshot order and emitted in first-seen order, so
//! no re-sorting happens anywhere. Time is O(total variations), space is
//! O(distinct items).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use squarefeed_core::{CatalogObject, CatalogSnapshot, FeedConfig, ItemVariation};

use crate::index::CatalogIndex;
use crate::name::normalize_display_name;

/// The only `product_type` that is merchandise. Everything else (event
/// registrations, memberships, services) never reaches the feed.
const PRODUCT_TYPE_REGULAR: &str = "REGULAR";

/// One sellable item, merged from all of its variations. Ephemeral: rebuilt
/// from scratch every pipeline run, never persisted.
#[derive(Debug, Clone)]
pub struct AggregatedItem {
    pub item_id: String,
    pub name: String,
    pub description: String,
    pub product_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    /// Smallest positive variation price seen so far, in minor units.
    /// `None` is the "no valid price yet" sentinel; items still carrying it
    /// after aggregation are dropped.
    pub min_price: Option<i64>,
    pub currency: String,
    /// Sum of every variation's stock, including zero-quantity variations.
    pub total_quantity: i64,
}

impl AggregatedItem {
    /// Folds one variation's derived values into the record.
    ///
    /// `min_price` only moves for a strictly positive price that beats the
    /// current minimum; stock level never gates price selection. The
    /// currency travels with the price. URL and image are first-wins
    /// fill-ins; name, description, category and brand were fixed at
    /// creation and are never touched here.
    fn fold_variation(
        &mut self,
        price: i64,
        currency: &str,
        quantity: i64,
        product_url: Option<&str>,
        image_url: Option<&str>,
    ) {
        self.total_quantity += quantity;
        if price > 0 && self.min_price.is_none_or(|current| price < current) {
            self.min_price = Some(price);
            self.currency = currency.to_string();
        }
        if self.product_url.is_none() {
            self.product_url = product_url.map(str::to_string);
        }
        if self.image_url.is_none() {
            self.image_url = image_url.map(str::to_string);
        }
    }
}

/// Aggregates all eligible items in the snapshot.
///
/// An item contributes nothing when it is deleted, archived, not `REGULAR`,
/// has no `item_data`, or has zero variations. Exclusion is steady-state
/// behavior for most catalog entries, so it is logged at debug level only.
/// Items whose variations never carried a positive price are dropped at the
/// end.
#[must_use]
pub fn aggregate(
    snapshot: &CatalogSnapshot,
    index: &CatalogIndex,
    config: &FeedConfig,
) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut slot_by_item_id: HashMap<String, usize> = HashMap::new();

    for object in &snapshot.objects {
        let CatalogObject::Item(item) = object else {
            continue;
        };
        if item.is_deleted {
            continue;
        }
        let Some(data) = item.item_data.as_ref() else {
            continue;
        };
        if data.is_archived || data.product_type != PRODUCT_TYPE_REGULAR {
            tracing::debug!(item_id = %item.id, product_type = %data.product_type,
                "skipping non-merchandise item");
            continue;
        }
        if data.variations.is_empty() {
            tracing::debug!(item_id = %item.id, "skipping item with no variations");
            continue;
        }

        let item_name = data.name.clone().unwrap_or_default();
        let product_url = data.ecom_url.as_deref();
        let image_url = data
            .image_ids
            .first()
            .and_then(|id| index.image_url(id));
        let category = data
            .reporting_category_id
            .as_deref()
            .and_then(|id| index.category_name(id));
        let brand = index.brand_name(&data.category_ids);

        for variation in &data.variations {
            let (price, currency) = variation_price(variation, config);
            let quantity = index.quantity(&variation.id);

            match slot_by_item_id.entry(item.id.clone()) {
                Entry::Occupied(slot) => {
                    items[*slot.get()].fold_variation(
                        price,
                        &currency,
                        quantity,
                        product_url,
                        image_url,
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(items.len());
                    let mut aggregated = AggregatedItem {
                        item_id: item.id.clone(),
                        name: derive_name(&item_name, variation),
                        description: data.description.clone().unwrap_or_default(),
                        product_url: product_url.map(str::to_string),
                        image_url: image_url.map(str::to_string),
                        category: category.map(str::to_string),
                        brand: brand.map(str::to_string),
                        min_price: None,
                        currency: config.fallback_currency.clone(),
                        total_quantity: 0,
                    };
                    aggregated.fold_variation(price, &currency, quantity, product_url, image_url);
                    items.push(aggregated);
                }
            }
        }
    }

    // No variation ever carried a positive price: not sellable, drop it.
    items.retain(|item| item.min_price.is_some());
    items
}

/// Price in minor units (0 meaning "no price set") and currency (falling
/// back to the configured default) for one variation.
fn variation_price(variation: &ItemVariation, config: &FeedConfig) -> (i64, String) {
    let money = variation
        .item_variation_data
        .as_ref()
        .and_then(|data| data.price_money.as_ref());
    let price = money.and_then(|m| m.amount).unwrap_or(0);
    let currency = money
        .and_then(|m| m.currency.clone())
        .unwrap_or_else(|| config.fallback_currency.clone());
    (price, currency)
}

/// Working name for the record: `"<item> - <variation>"` when the variation
/// has a distinct display name, else the item name alone, then normalized.
/// Only the first variation of an item ever reaches this; later folds keep
/// the creation-time name.
fn derive_name(item_name: &str, variation: &ItemVariation) -> String {
    let variation_name = variation
        .item_variation_data
        .as_ref()
        .and_then(|data| data.name.as_deref())
        .filter(|name| !name.is_empty() && *name != item_name);
    let working = match variation_name {
        Some(variation_name) => format!("{item_name} - {variation_name}"),
        None => item_name.to_string(),
    };
    normalize_display_name(&working)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
