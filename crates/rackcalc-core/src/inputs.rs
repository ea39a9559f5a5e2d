//! Numeric calculator inputs.

use serde::{Deserialize, Serialize};

use crate::calculator::{compute_layout, RackLayout};

/// The four numbers the calculator works from.
///
/// Counts are integers, RU sizes may be fractional. Negative values are
/// accepted as-is; only the divisor-bearing fields are checked, by
/// [`RackInputs::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RackInputs {
    /// Servers to place.
    pub total_servers: i64,
    /// RU height of one server.
    pub server_ru: f64,
    /// Racks available.
    pub rack_total: i64,
    /// RU capacity of one rack.
    pub ru_per_rack: f64,
}

impl RackInputs {
    #[must_use]
    pub fn new(total_servers: i64, server_ru: f64, rack_total: i64, ru_per_rack: f64) -> Self {
        Self {
            total_servers,
            server_ru,
            rack_total,
            ru_per_rack,
        }
    }

    /// Whether every divisor is strictly positive. NaN fails the check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.server_ru > 0.0 && self.ru_per_rack > 0.0 && self.rack_total > 0
    }

    /// Compute the rack layout for these inputs.
    #[must_use]
    pub fn layout(&self) -> RackLayout {
        compute_layout(self)
    }
}
