use std::env::VarError;

/// Feed generation settings. Everything is optional and degrades to a
/// default; a missing environment is never an error.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Fallback brand when an item matches no brand category. Absent means
    /// the `brand` column is left empty for such items.
    pub default_brand: Option<String>,
    /// Currency code used when a variation's price omits one. The shop
    /// operates in a single currency, so this is `"AUD"` in practice.
    pub fallback_currency: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_brand: None,
            fallback_currency: "AUD".to_string(),
        }
    }
}

/// Load feed configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
#[must_use]
pub fn load_feed_config() -> FeedConfig {
    dotenvy::dotenv().ok();
    build_feed_config(|key| std::env::var(key))
}

/// Build feed configuration using the provided env-var lookup function.
///
/// Decoupled from the actual environment so it can be tested with a pure
/// `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_feed_config<F>(lookup: F) -> FeedConfig
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let default_brand = lookup("SQUAREFEED_DEFAULT_BRAND")
        .ok()
        .filter(|s| !s.is_empty());
    let fallback_currency =
        lookup("SQUAREFEED_FALLBACK_CURRENCY").unwrap_or_else(|_| "AUD".to_string());
    FeedConfig {
        default_brand,
        fallback_currency,
    }
}
