//! URL slug derivation for city display names.

/// Slugify a display name: trim, lowercase, collapse internal
/// whitespace runs to single hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
