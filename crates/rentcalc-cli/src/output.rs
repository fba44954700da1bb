//! CLI output formatting.

use rentcalc_core::currency::format_gbp;
use rentcalc_core::{City, Estimate};

/// Line describing the raw income as understood by the pipeline.
#[must_use]
pub fn income_line(raw_income: &str) -> String {
    if raw_income.trim().is_empty() {
        "Annual household income: (not provided)".to_string()
    } else {
        format!("Annual household income: {raw_income}")
    }
}

/// Line with the derived affordable rent, or the helper prompt when
/// nothing could be derived.
#[must_use]
pub fn rent_line(estimate: &Estimate) -> String {
    if estimate.affordable_rent > 0.0 {
        format!(
            "Affordable monthly rent: {}",
            format_gbp(estimate.rounded_rent)
        )
    } else {
        "Enter your annual salary to start".to_string()
    }
}

/// Line with the per-city bills estimate.
#[must_use]
pub fn bills_line(city: City, estimate: &Estimate) -> String {
    format!(
        "Monthly bills for a 2-bed in {city}: {}~",
        format_gbp(i64::from(estimate.bills_gbp))
    )
}

/// Line with the outbound search URL, when the search can run.
#[must_use]
pub fn search_line(estimate: &Estimate) -> Option<String> {
    estimate
        .search
        .as_ref()
        .map(|url| format!("Search: {url}"))
}
