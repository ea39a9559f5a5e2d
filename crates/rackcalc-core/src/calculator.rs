//! The distribution calculator.
//!
//! [`compute_layout`] is a pure function from [`RackInputs`] to [`RackLayout`].
//! It never fails: inputs that would divide by zero produce the all-zero
//! layout, and running out of RU is a flag on an otherwise normal result.
//! A rack count above [`MAX_RACK_TOTAL`] is not laid out either; the result
//! is the all-zero layout with `rack_limit_exceeded` set.
//!
//! Extra servers go to the lowest-numbered racks first. The per-rack base
//! share is capped at the physical limit, but the extras are not, so callers
//! must check `capacity_exceeded` to detect overflow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RACK_TOTAL, UTILIZATION_SCALE};
use crate::inputs::RackInputs;

/// Suggestion for a server total that spreads evenly over every rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvenSpread {
    /// An even total fits within the racks' RU capacity.
    Feasible {
        /// Smallest multiple of the rack count that is at least the requested total.
        servers_for_even_distribution: i64,
        /// Servers to add to reach that total (0 when already even).
        additional_servers_needed: i64,
    },
    /// The next even total would not fit in the available RU.
    ExceedsCapacity,
    /// Inputs failed the validity gate.
    #[default]
    NotComputed,
}

impl EvenSpread {
    /// The suggested server total, if any.
    #[must_use]
    pub fn target(&self) -> Option<i64> {
        match self {
            Self::Feasible {
                servers_for_even_distribution,
                ..
            } => Some(*servers_for_even_distribution),
            _ => None,
        }
    }

    /// Servers to add to reach the suggested total, if any.
    #[must_use]
    pub fn additional(&self) -> Option<i64> {
        match self {
            Self::Feasible {
                additional_servers_needed,
                ..
            } => Some(*additional_servers_needed),
            _ => None,
        }
    }
}

/// Everything derived from one set of [`RackInputs`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RackLayout {
    /// Whether the inputs passed the validity gate.
    pub valid: bool,
    /// Physical ceiling per rack: `floor(ru_per_rack / server_ru)`.
    pub max_servers_per_rack: i64,
    /// Even share per rack, capped at `max_servers_per_rack`.
    pub base_servers_per_rack: i64,
    /// Racks that receive one server above the base share.
    pub extra_distribution: i64,
    pub ru_available_total: f64,
    pub total_ru_needed: f64,
    /// Percentage, one decimal place. NaN when the needed RU is itself NaN,
    /// e.g. an infinite server RU with no servers.
    pub ru_utilization: f64,
    /// `total_ru_needed > ru_available_total`.
    pub capacity_exceeded: bool,
    /// Server count per rack, in rack order.
    pub distribution: Vec<i64>,
    /// Server count → number of racks holding that count.
    pub rack_summary: BTreeMap<i64, usize>,
    pub even_spread: EvenSpread,
    /// The rack count was above [`MAX_RACK_TOTAL`], so nothing was laid out.
    #[serde(default)]
    pub rack_limit_exceeded: bool,
}

impl RackLayout {
    /// Total servers represented by the distribution.
    #[must_use]
    pub fn servers_placed(&self) -> i64 {
        self.distribution.iter().copied().fold(0, i64::saturating_add)
    }

    /// Whether every rack holds the same number of servers.
    #[must_use]
    pub fn is_evenly_distributed(&self) -> bool {
        self.valid && self.extra_distribution == 0
    }

    /// Iterate `(rack_number, servers)` with 1-based rack numbers.
    pub fn racks(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.distribution
            .iter()
            .enumerate()
            .map(|(i, &count)| (i + 1, count))
    }
}

/// Compute the rack layout for the given inputs.
#[must_use]
pub fn compute_layout(inputs: &RackInputs) -> RackLayout {
    if !inputs.is_valid() {
        tracing::debug!(?inputs, "inputs failed the validity gate");
        return RackLayout::default();
    }
    if inputs.rack_total > MAX_RACK_TOTAL {
        tracing::warn!(rack_total = inputs.rack_total, "rack total above the supported maximum");
        return RackLayout {
            rack_limit_exceeded: true,
            ..RackLayout::default()
        };
    }

    let RackInputs {
        total_servers,
        server_ru,
        rack_total,
        ru_per_rack,
    } = *inputs;

    let max_servers_per_rack = floor_to_i64(ru_per_rack / server_ru);
    // rack_total > 0 here, so euclidean division is floor division.
    let base_servers_per_rack = total_servers
        .div_euclid(rack_total)
        .min(max_servers_per_rack);
    let extra_distribution = total_servers % rack_total;

    #[allow(clippy::cast_precision_loss)]
    let ru_available_total = ru_per_rack * rack_total as f64;
    #[allow(clippy::cast_precision_loss)]
    let total_ru_needed = total_servers as f64 * server_ru;

    let ru_utilization = if ru_available_total > 0.0 {
        round_utilization(total_ru_needed / ru_available_total * 100.0)
    } else {
        0.0
    };

    let distribution = distribute(base_servers_per_rack, extra_distribution, rack_total);
    let rack_summary = summarize(&distribution);
    let even_spread = even_spread(total_servers, server_ru, rack_total, ru_available_total);
    let capacity_exceeded = total_ru_needed > ru_available_total;

    tracing::debug!(
        max_servers_per_rack,
        base_servers_per_rack,
        extra_distribution,
        ru_utilization,
        capacity_exceeded,
        "computed rack layout"
    );

    RackLayout {
        valid: true,
        max_servers_per_rack,
        base_servers_per_rack,
        extra_distribution,
        ru_available_total,
        total_ru_needed,
        ru_utilization,
        capacity_exceeded,
        distribution,
        rack_summary,
        even_spread,
        rack_limit_exceeded: false,
    }
}

/// First `extra` racks get `base + 1`, the rest get `base`.
fn distribute(base: i64, extra: i64, rack_total: i64) -> Vec<i64> {
    let racks = usize::try_from(rack_total).unwrap_or(0);
    // A negative remainder never selects a rack.
    let extra = usize::try_from(extra).unwrap_or(0);
    (0..racks)
        .map(|i| if i < extra { base.saturating_add(1) } else { base })
        .collect()
}

fn summarize(distribution: &[i64]) -> BTreeMap<i64, usize> {
    let mut summary = BTreeMap::new();
    for &count in distribution {
        *summary.entry(count).or_insert(0) += 1;
    }
    summary
}

fn even_spread(
    total_servers: i64,
    server_ru: f64,
    rack_total: i64,
    ru_available_total: f64,
) -> EvenSpread {
    let remainder = total_servers.rem_euclid(rack_total);
    let target = if remainder == 0 {
        Some(total_servers)
    } else {
        total_servers.checked_add(rack_total - remainder)
    };

    let max_physical_servers = floor_to_i64(ru_available_total / server_ru);
    match target {
        Some(target) if target <= max_physical_servers => EvenSpread::Feasible {
            servers_for_even_distribution: target,
            additional_servers_needed: target - total_servers,
        },
        _ => EvenSpread::ExceedsCapacity,
    }
}

/// Floor to an integer, saturating at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn floor_to_i64(value: f64) -> i64 {
    value.floor() as i64
}

fn round_utilization(percent: f64) -> f64 {
    (percent * UTILIZATION_SCALE).round() / UTILIZATION_SCALE
}
