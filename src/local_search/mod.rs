//! Local search operators for improving an ordering.
//!
//! - [`two_opt`] — Segment reversal, first improvement then restart
//! - [`three_opt`] — Three-cut reversal variants, delegates to 2-opt below six stops
//! - [`improve_offloaded`] — Runs either on a worker thread with in-process fallback
//!
//! Position 0 is never moved; the last position stays put when
//! [`SearchConfig::fixed_end`] is set.

mod offload;
mod three_opt;
mod two_opt;

pub use offload::improve_offloaded;
pub use three_opt::{three_opt, three_opt_with};
pub use two_opt::{two_opt, two_opt_with};

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::models::LocalSearchKind;

/// Minimum cost decrease for a move to count as an improvement.
pub(crate) const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Parameters shared by the local-search operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Cap on improvement passes.
    pub max_iterations: usize,
    /// Whether candidate costs include the closing leg.
    pub round_trip: bool,
    /// Keeps the last position in place (pinned end point).
    pub fixed_end: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            round_trip: true,
            fixed_end: false,
        }
    }
}

impl SearchConfig {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }

    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    pub fn with_fixed_end(mut self, fixed_end: bool) -> Self {
        self.fixed_end = fixed_end;
        self
    }
}

/// Outcome of one local-search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    /// The improved ordering.
    pub order: Vec<usize>,
    /// Cost of `order` under the search's round-trip setting.
    pub cost: f64,
    /// Improvement passes started.
    pub passes: usize,
    /// Moves accepted.
    pub moves: usize,
}

/// Runs the selected local search on `order`.
///
/// [`LocalSearchKind::None`] returns `order` unchanged with its cost.
pub fn improve(
    kind: LocalSearchKind,
    order: &[usize],
    distances: &DistanceMatrix,
    config: &SearchConfig,
) -> Improvement {
    match kind {
        LocalSearchKind::None => Improvement {
            order: order.to_vec(),
            cost: crate::evaluation::route_cost(order, distances, config.round_trip),
            passes: 0,
            moves: 0,
        },
        LocalSearchKind::TwoOpt => two_opt_with(order, distances, config),
        LocalSearchKind::ThreeOpt => three_opt_with(order, distances, config),
    }
}

/// Copy of `order` with `order[i..=j]` reversed.
pub(crate) fn reversed(order: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut candidate = order.to_vec();
    candidate[i..=j].reverse();
    candidate
}
