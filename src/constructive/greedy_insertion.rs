//! Cheapest-insertion constructive heuristic.
//!
//! Grows a path from a single stop by repeatedly inserting the
//! (location, position) pair that adds the least cost.
//!
//! # Complexity
//!
//! O(n³): up to n rounds, each scanning n candidates × n positions.

use crate::distance::DistanceMatrix;

/// Builds an ordering by greedy cheapest insertion.
///
/// Starts from `[start]`. Each round scans unvisited locations in ascending
/// index order and every position `0..=len`, and inserts the pair with the
/// smallest [`insertion_cost`]. Ties keep the first pair found (lowest index,
/// then lowest position).
///
/// Inserting at position 0 is allowed, so the result does not necessarily
/// begin with `start`. If no finite insertion exists, construction stops and
/// the partial path is returned.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::constructive::greedy_insertion;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// // Prepending 1 before 0 is as cheap as appending it, and comes first.
/// let order = greedy_insertion(&dm, 0);
/// assert_eq!(order, vec![3, 2, 1, 0]);
/// ```
pub fn greedy_insertion(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let mut in_path = vec![false; n];
    let mut path = Vec::with_capacity(n);
    in_path[start] = true;
    path.push(start);

    while path.len() < n {
        let mut best: Option<(usize, usize, f64)> = None;
        for point in 0..n {
            if in_path[point] {
                continue;
            }
            for pos in 0..=path.len() {
                let cost = insertion_cost(&path, point, pos, distances);
                if cost < best.map_or(f64::INFINITY, |(_, _, bc)| bc) {
                    best = Some((point, pos, cost));
                }
            }
        }

        match best {
            Some((point, pos, _)) => {
                path.insert(pos, point);
                in_path[point] = true;
            }
            None => break,
        }
    }

    path
}

/// Cost added by inserting `point` before `path[position]`.
///
/// Internal positions cost `d(prev, point) + d(point, next) - d(prev, next)`;
/// the front costs `d(point, path[0])` and the back `d(path[last], point)`.
pub fn insertion_cost(
    path: &[usize],
    point: usize,
    position: usize,
    distances: &DistanceMatrix,
) -> f64 {
    if position == 0 {
        return distances.get(point, path[0]);
    }
    if position == path.len() {
        return distances.get(path[path.len() - 1], point);
    }
    let prev = path[position - 1];
    let next = path[position];
    distances.get(prev, point) + distances.get(point, next) - distances.get(prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_insertion_cost_boundaries() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 4.0, 6.0],
            vec![3.0, 0.0, 2.0],
            vec![5.0, 1.0, 0.0],
        ])
        .expect("valid");
        let path = [0, 2];
        // front: d(1, 0)
        assert_eq!(insertion_cost(&path, 1, 0, &dm), 3.0);
        // back: d(2, 1)
        assert_eq!(insertion_cost(&path, 1, 2, &dm), 1.0);
        // between: d(0, 1) + d(1, 2) - d(0, 2)
        assert_eq!(insertion_cost(&path, 1, 1, &dm), 0.0);
    }

    #[test]
    fn test_gi_can_insert_before_start() {
        // Stop 1 is much cheaper to reach 0 from than the other way round.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 9.0, 5.0],
            vec![1.0, 0.0, 9.0],
            vec![5.0, 9.0, 0.0],
        ])
        .expect("valid");
        let order = greedy_insertion(&dm, 0);
        assert_eq!(order[0], 1);
        assert!(is_permutation(&order, 3));
    }

    #[test]
    fn test_gi_visits_all_from_every_start() {
        let d = std::f64::consts::SQRT_2;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, d, 1.0],
            vec![1.0, 0.0, 1.0, d],
            vec![d, 1.0, 0.0, 1.0],
            vec![1.0, d, 1.0, 0.0],
        ])
        .expect("valid");
        for start in 0..4 {
            let order = greedy_insertion(&dm, start);
            assert!(is_permutation(&order, 4), "start {start}: {order:?}");
        }
    }

    #[test]
    fn test_gi_tie_goes_to_lowest_index_then_position() {
        // All costs equal: every round inserts the lowest free index at the front.
        let mut dm = DistanceMatrix::new(3);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    dm.set(i, j, 1.0);
                }
            }
        }
        assert_eq!(greedy_insertion(&dm, 2), vec![1, 0, 2]);
    }

    #[test]
    fn test_gi_stops_without_finite_insertion() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, inf],
            vec![1.0, 0.0, inf],
            vec![inf, inf, 0.0],
        ])
        .expect("valid");
        assert_eq!(greedy_insertion(&dm, 0).len(), 2);
    }

    #[test]
    fn test_gi_trivial_sizes() {
        assert!(greedy_insertion(&DistanceMatrix::new(0), 0).is_empty());
        assert_eq!(greedy_insertion(&DistanceMatrix::new(1), 0), vec![0]);
    }
}
