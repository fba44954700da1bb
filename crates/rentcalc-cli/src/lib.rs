//! # rentcalc-cli
//!
//! Non-interactive estimate output for scripted use.

pub mod output;
pub mod presenter;

pub use presenter::CliEstimatePresenter;
