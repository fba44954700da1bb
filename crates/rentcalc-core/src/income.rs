//! Income text sanitizing and the affordability rule.

use crate::constants::AFFORDABILITY_DIVISOR;

/// Strip everything except ASCII digits and `.` from raw income text.
///
/// The widget accepts arbitrary text; sanitizing happens here, at
/// derivation time, and never signals an error.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Derive the affordable monthly rent from raw income text.
///
/// Parse failures and non-positive values degrade to 0.
#[must_use]
pub fn affordable_rent(raw: &str) -> f64 {
    let numeric: f64 = sanitize(raw).parse().unwrap_or(0.0);
    if !numeric.is_finite() || numeric <= 0.0 {
        return 0.0;
    }
    numeric / AFFORDABILITY_DIVISOR
}
