//! Restaurant slug helpers
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens. The slug is the only public identifier of
//! a restaurant's menu page, so lookups normalize case and whitespace first.

/// Normalize a slug received from a URL before lookup (trim + lowercase).
pub fn normalize_slug(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Return `true` when `value` is a valid restaurant slug.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.trim() == value
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Derive a slug from a restaurant display name.
///
/// Non-alphanumeric runs collapse to a single hyphen, e.g.
/// "Second Cup  Café" -> "second-cup-caf".
pub fn slug_from_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.trim().to_ascii_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
