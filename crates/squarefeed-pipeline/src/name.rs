//! Display-name normalization for aggregated items.
//!
//! The catalog contains names typed in by hand over many years: all-caps
//! entries (`"MAVERICK"`) and duplicated `"ITEM - ITEM - variant"` patterns
//! from a bulk import. Normalization repairs both, and is idempotent so it
//! is safe to apply to already-clean names.

/// Normalizes a raw display name.
///
/// Rules, in order:
/// 1. Split on the literal separator `" - "` and keep the first segment.
///    Only the first segment survives no matter how many duplications the
///    raw name carries.
/// 2. Trim surrounding whitespace.
/// 3. If the segment has no lower-case character and is longer than one
///    character, convert to sentence case (first character upper, remainder
///    lower). Mixed-case names pass through unchanged.
#[must_use]
pub(crate) fn normalize_display_name(raw: &str) -> String {
    let segment = raw.split(" - ").next().unwrap_or(raw).trim();
    if segment.chars().count() > 1 && !segment.chars().any(char::is_lowercase) {
        sentence_case(segment)
    } else {
        segment.to_string()
    }
}

/// First character upper-cased, everything after it lower-cased.
fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
