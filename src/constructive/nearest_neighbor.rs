//! Nearest-neighbor constructive heuristic.
//!
//! Builds an ordering greedily: starting from a given stop, always append the
//! nearest unvisited stop.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::DistanceMatrix;

/// Builds an ordering with the nearest-neighbor heuristic.
///
/// Starting at `start`, repeatedly appends the unvisited location with the
/// smallest cost from the current last stop. Ties go to the lowest index.
/// Locations that are unreachable (infinite cost from the current stop and
/// every later one) end construction early, and the partial ordering is
/// returned as-is.
///
/// Returns an empty ordering for an empty matrix and `[0]` for a single
/// location.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::nearest_neighbor;
///
/// // Four stops on a line at 0, 1, 2, 3.
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(nearest_neighbor(&dm, 0), vec![0, 1, 2, 3]);
/// assert_eq!(nearest_neighbor(&dm, 2), vec![2, 1, 0, 3]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    // Unvisited stops in ascending index order, so ties keep the lowest.
    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut path = Vec::with_capacity(n);
    path.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        if distances.get(current, next) == f64::INFINITY {
            break;
        }
        remaining.retain(|&i| i != next);
        path.push(next);
        current = next;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DistanceMatrix {
        let xs = [0.0f64, 1.0, 2.0, 3.0];
        let mut dm = DistanceMatrix::new(xs.len());
        for i in 0..xs.len() {
            for j in 0..xs.len() {
                dm.set(i, j, (xs[i] - xs[j]).abs());
            }
        }
        dm
    }

    #[test]
    fn test_nn_visits_all() {
        let order = nearest_neighbor(&line(), 1);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
        assert_eq!(order[0], 1);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 1.0],
            vec![10.0, 0.0, 9.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm, 0), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_goes_to_lowest_index() {
        // From 0, stops 1 and 3 are both at distance 1.
        let d = std::f64::consts::SQRT_2;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, d, 1.0],
            vec![1.0, 0.0, 1.0, d],
            vec![d, 1.0, 0.0, 1.0],
            vec![1.0, d, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm, 0), vec![0, 1, 2, 3]);
        assert_eq!(nearest_neighbor(&dm, 2), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_nn_asymmetric_uses_outbound_cost() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![9.0, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm, 0), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_stops_at_unreachable() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, inf],
            vec![1.0, 0.0, inf],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm, 0), vec![0, 1]);
    }

    #[test]
    fn test_nn_trivial_sizes() {
        assert!(nearest_neighbor(&DistanceMatrix::new(0), 0).is_empty());
        assert_eq!(nearest_neighbor(&DistanceMatrix::new(1), 0), vec![0]);
    }

    #[test]
    fn test_nn_deterministic() {
        let dm = line();
        for start in 0..4 {
            assert_eq!(nearest_neighbor(&dm, start), nearest_neighbor(&dm, start));
        }
    }

    #[test]
    fn test_nn_each_step_is_matrix_nearest() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 2.0, 2.0, 7.0],
            vec![3.0, 0.0, 4.0, 1.0, 2.0],
            vec![2.0, 4.0, 0.0, 5.0, 1.0],
            vec![2.0, 1.0, 5.0, 0.0, 6.0],
            vec![7.0, 2.0, 1.0, 6.0, 0.0],
        ])
        .expect("valid");
        let order = nearest_neighbor(&dm, 0);
        // From 0, stops 2 and 3 tie at 2.0; the lower index wins.
        assert_eq!(order, vec![0, 2, 4, 1, 3]);
        for k in 1..order.len() {
            let remaining: Vec<usize> = (0..5).filter(|i| !order[..k].contains(i)).collect();
            assert_eq!(dm.nearest_neighbor(order[k - 1], &remaining), Some(order[k]));
        }
    }
}
