//! Search action state for the primary control.

use crate::city::City;

/// The three mutually exclusive states of the search control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// City selected and rent derived: the search can run.
    SearchNow,
    /// Rent derived but no city selected.
    SelectCity,
    /// No usable income (regardless of city selection).
    SelectCityAndIncome,
}

impl SearchAction {
    /// Derive the action state from the current selection and rent.
    #[must_use]
    pub fn derive(city: Option<City>, affordable_rent: f64) -> Self {
        match (city.is_some(), affordable_rent > 0.0) {
            (true, true) => SearchAction::SearchNow,
            (false, true) => SearchAction::SelectCity,
            _ => SearchAction::SelectCityAndIncome,
        }
    }

    /// Label shown on the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SearchAction::SearchNow => "Search now",
            SearchAction::SelectCity => "Select a city to search available properties",
            SearchAction::SelectCityAndIncome => {
                "Select a city and income to search available properties"
            }
        }
    }

    /// Whether the control is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, SearchAction::SearchNow)
    }
}
