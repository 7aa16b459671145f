//! The `generate` command: snapshot file in, feed text out.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use squarefeed_core::{load_feed_config, load_snapshot, FeedConfig};
use squarefeed_pipeline::generate_feed;

/// Loads the snapshot, runs the pipeline and writes the feed to `out` (or
/// stdout when absent).
pub(crate) fn run(snapshot_path: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    let config = load_feed_config();
    let feed = build_feed(snapshot_path, &config)?;

    match out {
        Some(path) => {
            fs::write(path, &feed)
                .with_context(|| format!("failed to write feed to {}", path.display()))?;
            tracing::info!(path = %path.display(), "feed written");
        }
        None => println!("{feed}"),
    }
    Ok(())
}

/// The testable core of the command: everything except where the output goes.
fn build_feed(snapshot_path: &Path, config: &FeedConfig) -> anyhow::Result<String> {
    let snapshot = load_snapshot(snapshot_path)?;
    let snapshot_age = Utc::now() - snapshot.fetched_at;
    tracing::info!(
        objects = snapshot.objects.len(),
        inventory_rows = snapshot.inventory_counts.len(),
        snapshot_age_minutes = snapshot_age.num_minutes(),
        "loaded catalog snapshot"
    );

    let feed = generate_feed(&snapshot, config);
    // Header plus one line per published product.
    let rows = feed.lines().count().saturating_sub(1);
    tracing::info!(rows, "feed generated");
    Ok(feed)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("squarefeed-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn build_feed_from_minimal_snapshot() {
        let path = temp_path("minimal.json");
        fs::write(
            &path,
            r#"{
                "fetched_at": "2026-08-01T02:30:00Z",
                "objects": [
                    {
                        "type": "IMAGE",
                        "id": "IMG-1",
                        "image_data": { "url": "https://cdn.example.com/towel.png" }
                    },
                    {
                        "type": "ITEM",
                        "id": "ITEM-1",
                        "item_data": {
                            "name": "Club Towel",
                            "image_ids": ["IMG-1"],
                            "ecom_url": "https://example.com/shop/towel",
                            "variations": [
                                {
                                    "type": "ITEM_VARIATION",
                                    "id": "VAR-1",
                                    "item_variation_data": {
                                        "name": "Default",
                                        "price_money": { "amount": 1500, "currency": "AUD" }
                                    }
                                }
                            ]
                        }
                    }
                ],
                "inventory_counts": [
                    { "catalog_object_id": "VAR-1", "quantity": "2" }
                ]
            }"#,
        )
        .unwrap();

        let feed = build_feed(&path, &FeedConfig::default()).unwrap();
        let lines: Vec<_> = feed.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("ITEM-1\tClub Towel\t"));
        assert!(lines[1].contains("\t15.00 AUD\t"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn build_feed_missing_snapshot_is_an_error() {
        let path = temp_path("missing.json");
        let err = build_feed(&path, &FeedConfig::default()).unwrap_err();
        assert!(err.to_string().contains("failed to read snapshot"));
    }
}
