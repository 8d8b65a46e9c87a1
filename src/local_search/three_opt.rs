//! 3-opt improvement on a single ordering.
//!
//! # Algorithm
//!
//! Examines cut triples `i < j < k` (with `j ≥ i + 2` and `k ≥ j + 2`) and,
//! for each, three reconnections: reverse `[i, j]`, reverse `[j, k]`, and
//! reverse `[i, k]`. The cheapest improving variant of the first improving
//! triple is applied and the scan restarts, as in 2-opt.
//!
//! Orderings whose movable span (all stops, minus the last when the end is
//! pinned) is shorter than six stops have no valid triple and are handed to
//! [`two_opt_with`] instead.
//!
//! # Complexity
//!
//! O(n³) triples per pass, O(n) to cost each variant.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_cost;

use super::{reversed, two_opt_with, Improvement, SearchConfig, IMPROVEMENT_EPSILON};

/// Smallest movable span 3-opt runs on; shorter ones use 2-opt.
const MIN_STOPS: usize = 6;

/// Applies 3-opt to a closed loop, keeping position 0 in place.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::route_cost;
/// use route_optimizer::local_search::three_opt;
///
/// // Six stops on a circle, visited in a scrambled order.
/// let pts: Vec<(f64, f64)> = (0..6)
///     .map(|k| {
///         let a = k as f64 * std::f64::consts::PI / 3.0;
///         (a.cos(), a.sin())
///     })
///     .collect();
/// let mut dm = DistanceMatrix::new(6);
/// for i in 0..6 {
///     for j in 0..6 {
///         dm.set(i, j, ((pts[i].0 - pts[j].0).powi(2) + (pts[i].1 - pts[j].1).powi(2)).sqrt());
///     }
/// }
/// let initial = [0, 3, 1, 4, 2, 5];
/// let result = three_opt(&initial, &dm, 100);
/// assert!(result.cost < route_cost(&initial, &dm, true));
/// ```
pub fn three_opt(order: &[usize], distances: &DistanceMatrix, max_iterations: usize) -> Improvement {
    three_opt_with(order, distances, &SearchConfig::new(max_iterations))
}

/// Applies 3-opt with explicit cost and endpoint settings.
pub fn three_opt_with(
    order: &[usize],
    distances: &DistanceMatrix,
    config: &SearchConfig,
) -> Improvement {
    let n = order.len();
    // Exclusive bound on the last cut position.
    let upper = if config.fixed_end { n.saturating_sub(1) } else { n };
    if upper < MIN_STOPS {
        return two_opt_with(order, distances, config);
    }

    let mut current = order.to_vec();
    let mut cost = route_cost(&current, distances, config.round_trip);
    let mut passes = 0;
    let mut moves = 0;

    while passes < config.max_iterations {
        passes += 1;
        match first_improving_triple(&current, cost, upper, distances, config.round_trip) {
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

fn first_improving_triple(
    order: &[usize],
    cost: f64,
    upper: usize,
    distances: &DistanceMatrix,
    round_trip: bool,
) -> Option<(Vec<usize>, f64)> {
    for i in 1..upper.saturating_sub(4) {
        for j in (i + 2)..(upper - 2) {
            for k in (j + 2)..upper {
                let mut best: Option<(Vec<usize>, f64)> = None;
                for (a, b) in [(i, j), (j, k), (i, k)] {
                    let candidate = reversed(order, a, b);
                    let candidate_cost = route_cost(&candidate, distances, round_trip);
                    let threshold = best.as_ref().map_or(cost - IMPROVEMENT_EPSILON, |(_, c)| *c);
                    if candidate_cost < threshold {
                        best = Some((candidate, candidate_cost));
                    }
                }
                if best.is_some() {
                    return best;
                }
            }
        }
    }
    None
}
