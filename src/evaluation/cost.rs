//! Ordering cost.

use crate::distance::DistanceMatrix;

/// Total cost of visiting `order`: `order[0] → … → order[n-1]`, plus the
/// closing leg `order[n-1] → order[0]` when `round_trip` is set.
///
/// Summation runs left to right over `order` with the closing leg last, the
/// same order [`RouteBuilder`](super::RouteBuilder) sums legs in, so the two
/// agree exactly. Orderings shorter than two stops cost zero.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::route_cost;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(route_cost(&[0, 1, 2], &dm, false), 3.0);
/// assert_eq!(route_cost(&[0, 1, 2], &dm, true), 7.0);
/// ```
pub fn route_cost(order: &[usize], distances: &DistanceMatrix, round_trip: bool) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut cost = 0.0;
    for pair in order.windows(2) {
        cost += distances.get(pair[0], pair[1]);
    }
    if round_trip {
        cost += distances.get(order[order.len() - 1], order[0]);
    }
    cost
}
