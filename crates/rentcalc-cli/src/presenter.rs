//! CLI estimate presenter.

use rentcalc_core::{City, Estimate};

use crate::output::{bills_line, income_line, rent_line, search_line};

/// Presents a one-shot estimate on stdout.
pub struct CliEstimatePresenter {
    quiet: bool,
}

impl CliEstimatePresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The lines that `present` prints, in order.
    #[must_use]
    pub fn lines(&self, raw_income: &str, city: Option<City>, estimate: &Estimate) -> Vec<String> {
        if self.quiet {
            return vec![estimate.rounded_rent.to_string()];
        }

        let mut lines = vec![income_line(raw_income), rent_line(estimate)];
        if let Some(city) = city {
            lines.push(bills_line(city, estimate));
        }
        if let Some(search) = search_line(estimate) {
            lines.push(search);
        }
        lines
    }

    /// Print the estimate.
    pub fn present(&self, raw_income: &str, city: Option<City>, estimate: &Estimate) {
        for line in self.lines(raw_income, city, estimate) {
            println!("{line}");
        }
    }
}
