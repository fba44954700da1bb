//! The closed set of supported cities and their monthly bill estimates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A city with a known monthly bill estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    London,
    Manchester,
    Birmingham,
    Leeds,
    Bristol,
    Glasgow,
}

impl City {
    /// All supported cities, in display order.
    #[must_use]
    pub fn all() -> &'static [City] {
        &[
            City::London,
            City::Manchester,
            City::Birmingham,
            City::Leeds,
            City::Bristol,
            City::Glasgow,
        ]
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            City::London => "London",
            City::Manchester => "Manchester",
            City::Birmingham => "Birmingham",
            City::Leeds => "Leeds",
            City::Bristol => "Bristol",
            City::Glasgow => "Glasgow",
        }
    }

    /// Estimated monthly bills for a 2-bed, in whole GBP.
    #[must_use]
    pub fn bills_gbp(self) -> u32 {
        match self {
            City::London => 300,
            City::Manchester => 250,
            City::Birmingham | City::Bristol => 220,
            City::Leeds => 190,
            City::Glasgow => 180,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no supported city.
#[derive(Debug, Error)]
#[error("unknown city '{0}' (expected one of: London, Manchester, Birmingham, Leeds, Bristol, Glasgow)")]
pub struct ParseCityError(String);

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "london" => Ok(City::London),
            "manchester" => Ok(City::Manchester),
            "birmingham" => Ok(City::Birmingham),
            "leeds" => Ok(City::Leeds),
            "bristol" => Ok(City::Bristol),
            "glasgow" => Ok(City::Glasgow),
            _ => Err(ParseCityError(s.trim().to_string())),
        }
    }
}

/// Bill estimate for an optional selection; 0 when no city is selected.
#[must_use]
pub fn bills_estimate(city: Option<City>) -> u32 {
    city.map_or(0, City::bills_gbp)
}
