//! Builders for catalog fixtures shared across the pipeline's test modules.

use squarefeed_core::{
    CatalogObject, CatalogSnapshot, CategoryData, CategoryObject, ImageData, ImageObject,
    InventoryCount, ItemData, ItemObject, ItemVariation, ItemVariationData, Money,
};

pub(crate) fn snapshot_with(
    objects: Vec<CatalogObject>,
    inventory_counts: Vec<InventoryCount>,
) -> CatalogSnapshot {
    CatalogSnapshot {
        fetched_at: "2026-08-01T02:30:00Z".parse().unwrap(),
        objects,
        inventory_counts,
    }
}

pub(crate) fn image(id: &str, url: &str) -> CatalogObject {
    CatalogObject::Image(ImageObject {
        id: id.to_string(),
        image_data: Some(ImageData {
            url: Some(url.to_string()),
        }),
    })
}

pub(crate) fn category(id: &str, name: &str, parent: Option<&str>) -> CatalogObject {
    CatalogObject::Category(CategoryObject {
        id: id.to_string(),
        category_data: Some(CategoryData {
            name: Some(name.to_string()),
            parent_category_id: parent.map(str::to_string),
        }),
    })
}

pub(crate) fn variation(id: &str, name: &str, price: Option<i64>) -> ItemVariation {
    ItemVariation {
        id: id.to_string(),
        item_variation_data: Some(ItemVariationData {
            name: Some(name.to_string()),
            price_money: price.map(|amount| Money {
                amount: Some(amount),
                currency: Some("AUD".to_string()),
            }),
        }),
    }
}

pub(crate) fn inventory(object_id: &str, quantity: &str) -> InventoryCount {
    InventoryCount {
        catalog_object_id: object_id.to_string(),
        quantity: quantity.to_string(),
    }
}

/// A REGULAR, non-deleted item with sensible defaults; tweak the returned
/// value for the case under test.
pub(crate) fn item(id: &str, name: &str, variations: Vec<ItemVariation>) -> ItemObject {
    ItemObject {
        id: id.to_string(),
        is_deleted: false,
        item_data: Some(ItemData {
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            image_ids: vec!["IMG-1".to_string()],
            category_ids: vec![],
            reporting_category_id: None,
            product_type: "REGULAR".to_string(),
            is_archived: false,
            ecom_url: Some(format!("https://example.com/shop/{id}")),
            variations,
        }),
    }
}
