//! 2-opt improvement on a single ordering.
//!
//! # Algorithm
//!
//! For every pair of positions `1 ≤ i < j ≤ last`, evaluate the ordering
//! with `order[i..=j]` reversed. Its full cost is recomputed from scratch;
//! the first candidate that is strictly cheaper is accepted and the scan
//! restarts from the beginning (first improvement, then restart). The search
//! ends after a pass without improvement or after `max_iterations` passes.
//!
//! # Complexity
//!
//! O(n²) candidates per pass, O(n) to cost each.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_cost;

use super::{reversed, Improvement, SearchConfig, IMPROVEMENT_EPSILON};

/// Applies 2-opt to a closed loop, keeping position 0 in place.
///
/// Shorthand for [`two_opt_with`] using round-trip costs and a free last
/// position.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::local_search::two_opt;
///
/// let d = std::f64::consts::SQRT_2;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, d, 1.0],
///     vec![1.0, 0.0, 1.0, d],
///     vec![d, 1.0, 0.0, 1.0],
///     vec![1.0, d, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// // 0 → 2 → 1 → 3 crosses both diagonals.
/// let result = two_opt(&[0, 2, 1, 3], &dm, 100);
/// assert!((result.cost - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt(order: &[usize], distances: &DistanceMatrix, max_iterations: usize) -> Improvement {
    two_opt_with(order, distances, &SearchConfig::new(max_iterations))
}

/// Applies 2-opt with explicit cost and endpoint settings.
///
/// Orderings with fewer than four stops are returned unchanged. The input
/// slice is never modified; every candidate is a fresh copy.
pub fn two_opt_with(
    order: &[usize],
    distances: &DistanceMatrix,
    config: &SearchConfig,
) -> Improvement {
    let n = order.len();
    let mut current = order.to_vec();
    let mut cost = route_cost(&current, distances, config.round_trip);
    let mut passes = 0;
    let mut moves = 0;

    if n < 4 {
        return Improvement {
            order: current,
            cost,
            passes,
            moves,
        };
    }

    let last = if config.fixed_end { n - 2 } else { n - 1 };

    while passes < config.max_iterations {
        passes += 1;
        match first_improving_reversal(&current, cost, last, distances, config.round_trip) {
            Some((candidate, candidate_cost)) => {
                current = candidate;
                cost = candidate_cost;
                moves += 1;
            }
            None => break,
        }
    }

    Improvement {
        order: current,
        cost,
        passes,
        moves,
    }
}

/// Scans `1 ≤ i < j ≤ last` and returns the first reversal cheaper than `cost`.
fn first_improving_reversal(
    order: &[usize],
    cost: f64,
    last: usize,
    distances: &DistanceMatrix,
    round_trip: bool,
) -> Option<(Vec<usize>, f64)> {
    for i in 1..last {
        for j in (i + 1)..=last {
            let candidate = reversed(order, i, j);
            let candidate_cost = route_cost(&candidate, distances, round_trip);
            if candidate_cost < cost - IMPROVEMENT_EPSILON {
                return Some((candidate, candidate_cost));
            }
        }
    }
    None
}
