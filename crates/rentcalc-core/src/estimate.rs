//! The derived-value pipeline: raw inputs in, everything displayable out.

use url::Url;

use crate::action::SearchAction;
use crate::city::{bills_estimate, City};
use crate::income::affordable_rent;
use crate::search::search_url;

/// Every value the UI derives from the raw income text and city selection.
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Affordable monthly rent (income / 30), 0 when underivable.
    pub affordable_rent: f64,
    /// `affordable_rent` rounded for display and for the search cap.
    pub rounded_rent: i64,
    /// Monthly bills for the selected city, 0 when unselected.
    pub bills_gbp: u32,
    /// State of the search control.
    pub action: SearchAction,
    /// Outbound search URL, present only when the search can run.
    pub search: Option<Url>,
}

impl Estimate {
    /// Recompute the whole pipeline from raw inputs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn derive(raw_income: &str, city: Option<City>) -> Self {
        let rent = affordable_rent(raw_income);
        let action = SearchAction::derive(city, rent);
        let search = match (city, action) {
            (Some(city), SearchAction::SearchNow) => search_url(city, rent),
            _ => None,
        };
        Self {
            affordable_rent: rent,
            rounded_rent: rent.round().max(0.0) as i64,
            bills_gbp: bills_estimate(city),
            action,
            search,
        }
    }
}
