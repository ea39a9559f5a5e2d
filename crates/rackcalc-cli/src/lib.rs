//! # rackcalc-cli
//!
//! CLI report output, JSON rendering, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter, ResultPresenter};
