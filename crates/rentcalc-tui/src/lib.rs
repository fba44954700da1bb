//! # rentcalc-tui
//!
//! Interactive affordability widget using ratatui with Elm architecture.

pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod launcher;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use keymap::{map_key, Focus, KeyAction};
pub use launcher::{OpenerLauncher, SearchLauncher};
pub use messages::TuiMessage;
pub use model::CalcApp;
pub use styles::ColorTheme;
