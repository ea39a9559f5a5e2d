//! # rackcalc-tui
//!
//! Interactive rack layout form using ratatui with Elm architecture.
//! Every keystroke updates the raw fields and recomputes the layout.

pub mod distribution;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use distribution::DistributionScroll;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
