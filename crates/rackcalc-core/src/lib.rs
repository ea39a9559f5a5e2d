//! # rackcalc-core
//!
//! Core library for the rack layout calculator: given a server count, a
//! per-server RU footprint, a rack count and a per-rack RU capacity, work out
//! how servers spread across racks and how full the racks are.

pub mod calculator;
pub mod coerce;
pub mod constants;
pub mod error;
pub mod inputs;

// Re-exports
pub use calculator::{compute_layout, EvenSpread, RackLayout};
pub use coerce::{InputField, RawInputs};
pub use constants::exit_codes;
pub use error::RackError;
pub use inputs::RackInputs;

/// Compute the rack layout from the four raw numbers.
///
/// # Example
/// ```
/// let layout = rackcalc_core::compute(10, 2.0, 3, 10.0);
/// assert_eq!(layout.distribution, vec![4, 3, 3]);
/// assert_eq!(layout.max_servers_per_rack, 5);
/// ```
#[must_use]
pub fn compute(total_servers: i64, server_ru: f64, rack_total: i64, ru_per_rack: f64) -> RackLayout {
    compute_layout(&RackInputs::new(
        total_servers,
        server_ru,
        rack_total,
        ru_per_rack,
    ))
}
