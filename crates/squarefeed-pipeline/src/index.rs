//! Catalog lookup indices, built in one pass over the snapshot.
//!
//! The Square export interleaves items, images and categories in a single
//! array; rather than re-scanning that mixed list per lookup, everything the
//! aggregator needs is partitioned into homogeneous maps up front.

use std::collections::{HashMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use squarefeed_core::{CatalogObject, CatalogSnapshot};

/// Category-name convention marking the brand subtree: children of the
/// category literally named `BRANDS` are brand categories.
pub const BRANDS_CATEGORY_NAME: &str = "BRANDS";

/// Lookup tables derived from one catalog snapshot. Built once per run and
/// discarded with it; never shared across invocations.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    images_by_id: HashMap<String, String>,
    categories_by_id: HashMap<String, String>,
    category_parent_by_id: HashMap<String, String>,
    brand_category_ids: HashSet<String>,
    inventory_by_variation_id: HashMap<String, Decimal>,
}

impl CatalogIndex {
    /// Builds all indices: one pass over the object list, one over the
    /// inventory rows.
    #[must_use]
    pub fn build(snapshot: &CatalogSnapshot) -> Self {
        let mut index = Self::default();
        // First BRANDS match wins if the name is duplicated; the convention
        // assumes a single such category.
        let mut brands_root: Option<String> = None;

        for object in &snapshot.objects {
            match object {
                CatalogObject::Image(image) => {
                    let Some(url) = image.image_data.as_ref().and_then(|d| d.url.clone()) else {
                        continue;
                    };
                    index.images_by_id.insert(image.id.clone(), url);
                }
                CatalogObject::Category(category) => {
                    let Some(data) = category.category_data.as_ref() else {
                        continue;
                    };
                    if let Some(name) = &data.name {
                        if name == BRANDS_CATEGORY_NAME && brands_root.is_none() {
                            brands_root = Some(category.id.clone());
                        }
                        index
                            .categories_by_id
                            .insert(category.id.clone(), name.clone());
                    }
                    if let Some(parent) = &data.parent_category_id {
                        index
                            .category_parent_by_id
                            .insert(category.id.clone(), parent.clone());
                    }
                }
                CatalogObject::Item(_) | CatalogObject::Other => {}
            }
        }

        // Brand categories are the direct children of the BRANDS category.
        // A single-hop parent check, so a cyclic parent chain cannot loop.
        if let Some(root) = brands_root {
            index.brand_category_ids = index
                .category_parent_by_id
                .iter()
                .filter(|(_, parent)| **parent == root)
                .map(|(id, _)| id.clone())
                .collect();
        }

        for count in &snapshot.inventory_counts {
            // Same object id appears once per stock location; sum them.
            // Malformed quantities contribute zero, not an error.
            let quantity = count
                .quantity
                .trim()
                .parse::<Decimal>()
                .unwrap_or(Decimal::ZERO);
            *index
                .inventory_by_variation_id
                .entry(count.catalog_object_id.clone())
                .or_insert(Decimal::ZERO) += quantity;
        }

        index
    }

    /// CDN URL for an image id, if the id resolves.
    #[must_use]
    pub fn image_url(&self, image_id: &str) -> Option<&str> {
        self.images_by_id.get(image_id).map(String::as_str)
    }

    /// Display name for a category id, if the id resolves.
    #[must_use]
    pub fn category_name(&self, category_id: &str) -> Option<&str> {
        self.categories_by_id.get(category_id).map(String::as_str)
    }

    /// Derives a brand from an item's category memberships: the first id in
    /// the list that is a brand category determines the brand. List order is
    /// the tie-break, so the result is deterministic.
    #[must_use]
    pub fn brand_name(&self, category_ids: &[String]) -> Option<&str> {
        category_ids
            .iter()
            .find(|id| self.brand_category_ids.contains(id.as_str()))
            .and_then(|id| self.category_name(id))
    }

    /// Total tracked stock for a variation, summed across locations and
    /// truncated to a whole count. Unknown ids are simply out of stock.
    #[must_use]
    pub fn quantity(&self, variation_id: &str) -> i64 {
        self.inventory_by_variation_id
            .get(variation_id)
            .map_or(0, |d| d.trunc().to_i64().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{category, image, inventory, snapshot_with};

    #[test]
    fn image_urls_are_indexed() {
        let snapshot = snapshot_with(vec![image("IMG-1", "https://cdn.example.com/a.png")], vec![]);
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(
            index.image_url("IMG-1"),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(index.image_url("IMG-MISSING"), None);
    }

    #[test]
    fn category_names_are_indexed() {
        let snapshot = snapshot_with(vec![category("CAT-1", "Putters", None)], vec![]);
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.category_name("CAT-1"), Some("Putters"));
    }

    #[test]
    fn brand_categories_are_children_of_brands() {
        let snapshot = snapshot_with(
            vec![
                category("CAT-BRANDS", "BRANDS", None),
                category("CAT-RPM", "RPM", Some("CAT-BRANDS")),
                category("CAT-PUTTERS", "Putters", None),
            ],
            vec![],
        );
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(
            index.brand_name(&["CAT-PUTTERS".to_string(), "CAT-RPM".to_string()]),
            Some("RPM")
        );
        assert_eq!(index.brand_name(&["CAT-PUTTERS".to_string()]), None);
    }

    #[test]
    fn no_brands_category_means_no_brand_ever() {
        let snapshot = snapshot_with(
            vec![
                category("CAT-RPM", "RPM", Some("CAT-SOMETHING-ELSE")),
                category("CAT-PUTTERS", "Putters", None),
            ],
            vec![],
        );
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.brand_name(&["CAT-RPM".to_string()]), None);
    }

    #[test]
    fn self_referential_parent_chain_does_not_loop() {
        // Broken upstream data: BRANDS claims itself as parent. The lookup
        // is a direct parent check, so this terminates and the brand set is
        // just the children (including, degenerately, BRANDS itself).
        let snapshot = snapshot_with(
            vec![
                category("CAT-BRANDS", "BRANDS", Some("CAT-BRANDS")),
                category("CAT-RPM", "RPM", Some("CAT-BRANDS")),
            ],
            vec![],
        );
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.brand_name(&["CAT-RPM".to_string()]), Some("RPM"));
    }

    #[test]
    fn quantities_sum_across_locations() {
        let snapshot = snapshot_with(
            vec![],
            vec![
                inventory("VAR-1", "2"),
                inventory("VAR-1", "3"),
                inventory("VAR-2", "1"),
            ],
        );
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.quantity("VAR-1"), 5);
        assert_eq!(index.quantity("VAR-2"), 1);
    }

    #[test]
    fn malformed_quantity_contributes_zero() {
        let snapshot = snapshot_with(
            vec![],
            vec![inventory("VAR-1", "not-a-number"), inventory("VAR-1", "4")],
        );
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.quantity("VAR-1"), 4);
    }

    #[test]
    fn fractional_quantities_truncate() {
        let snapshot = snapshot_with(vec![], vec![inventory("VAR-1", "1.5")]);
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.quantity("VAR-1"), 1);
    }

    #[test]
    fn unknown_variation_defaults_to_zero() {
        let snapshot = snapshot_with(vec![], vec![]);
        let index = CatalogIndex::build(&snapshot);
        assert_eq!(index.quantity("VAR-NOWHERE"), 0);
    }
}
