//! Outbound property-search URL construction.

use url::Url;

use crate::city::City;
use crate::constants::{SEARCH_BASE_URL, SEARCH_PATH_PREFIX};
use crate::slug::slugify;

/// Build the outbound search URL for a city, capped at the affordable rent.
///
/// Returns `None` when the rent is not positive; the search action is
/// inert in that state. The shape is part of the external contract:
/// `<base>/properties-to-rent/<city-slug>?term=<city>&prices_max=<n>`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn search_url(city: City, affordable_rent: f64) -> Option<Url> {
    if !affordable_rent.is_finite() || affordable_rent <= 0.0 {
        return None;
    }
    let max_price = affordable_rent.round() as i64;

    let mut url = Url::parse(SEARCH_BASE_URL).ok()?;
    url.set_path(&format!("/{}/{}", SEARCH_PATH_PREFIX, slugify(city.label())));
    url.query_pairs_mut()
        .append_pair("term", city.label())
        .append_pair("prices_max", &max_price.to_string());

    tracing::debug!(%url, "constructed search url");
    Some(url)
}
