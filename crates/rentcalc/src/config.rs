//! Application configuration from CLI flags and environment.

use clap::Parser;

use rentcalc_core::constants::DEFAULT_ANIMATION_MS;
use rentcalc_core::City;

/// RentCalc-rs — rent affordability calculator.
#[derive(Parser, Debug)]
#[command(name = "rentcalc", version, about)]
pub struct AppConfig {
    /// Annual household income (arbitrary text; non-numeric characters
    /// are ignored).
    #[arg(short, long, env = "RENTCALC_INCOME")]
    pub income: Option<String>,

    /// City to rent in: London, Manchester, Birmingham, Leeds, Bristol,
    /// or Glasgow.
    #[arg(short, long, env = "RENTCALC_CITY")]
    pub city: Option<City>,

    /// Launch the interactive TUI (the default when no income is given).
    #[arg(long)]
    pub tui: bool,

    /// Count-up animation window in milliseconds (0 snaps instantly).
    #[arg(long, default_value_t = DEFAULT_ANIMATION_MS, env = "RENTCALC_ANIMATION_MS")]
    pub animation_ms: u64,

    /// Open the search results in the default browser (CLI mode).
    #[arg(long)]
    pub open: bool,

    /// Quiet mode (only output the rounded rent figure).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether to launch the interactive widget.
    #[must_use]
    pub fn interactive(&self) -> bool {
        self.tui || self.income.is_none()
    }

    /// The animation window as a `Duration`.
    #[must_use]
    pub fn animation(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation_ms)
    }
}
