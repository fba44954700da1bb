//! Shared constants for the affordability pipeline.

/// Annual income is divided by this to estimate a sustainable monthly rent.
pub const AFFORDABILITY_DIVISOR: f64 = 30.0;

/// Default count-up animation window in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = 1000;

/// Interval between animation frames in milliseconds (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

/// Base URL of the external property-search provider.
pub const SEARCH_BASE_URL: &str = "https://www.openrent.co.uk";

/// URL path prefix for rental search result pages.
pub const SEARCH_PATH_PREFIX: &str = "properties-to-rent";
