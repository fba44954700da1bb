//! # rentcalc-core
//!
//! Core library for RentCalc-rs. Implements the affordability rule,
//! the city bill table, the count-up animation engine, and outbound
//! search URL construction.

pub mod action;
pub mod city;
pub mod constants;
pub mod countup;
pub mod currency;
pub mod estimate;
pub mod income;
pub mod search;
pub mod slug;

// Re-exports
pub use action::SearchAction;
pub use city::{bills_estimate, City, ParseCityError};
pub use constants::{AFFORDABILITY_DIVISOR, DEFAULT_ANIMATION_MS, TICK_INTERVAL_MS};
pub use countup::CountUp;
pub use estimate::Estimate;

/// Derive the affordable monthly rent from raw income text.
///
/// This is a convenience function for simple use cases. For the full
/// derived-value pipeline (bills, action state, search URL), use
/// [`Estimate::derive`].
///
/// # Example
/// ```
/// assert_eq!(rentcalc_core::affordable_rent("60000"), 2000.0);
/// assert_eq!(rentcalc_core::affordable_rent("not a number"), 0.0);
/// ```
#[must_use]
pub fn affordable_rent(raw_income: &str) -> f64 {
    income::affordable_rent(raw_income)
}
