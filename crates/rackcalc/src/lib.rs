//! rackcalc library: application logic for the rack layout calculator.

pub mod app;
pub mod config;
pub mod errors;
