//! Local search on a worker thread.

use std::thread;

use crate::distance::DistanceMatrix;
use crate::models::LocalSearchKind;

use super::{improve, Improvement, SearchConfig};

const WORKER_NAME: &str = "route-local-search";

/// Runs [`improve`] on a scoped worker thread.
///
/// The result is identical to running in-process. If the thread cannot be
/// spawned or the worker panics, the search is repeated on the calling
/// thread; this never fails.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::local_search::{improve, improve_offloaded, SearchConfig};
/// use route_optimizer::models::LocalSearchKind;
///
/// let d = std::f64::consts::SQRT_2;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, d, 1.0],
///     vec![1.0, 0.0, 1.0, d],
///     vec![d, 1.0, 0.0, 1.0],
///     vec![1.0, d, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = SearchConfig::default();
/// let off = improve_offloaded(LocalSearchKind::TwoOpt, &[0, 2, 1, 3], &dm, &config);
/// let local = improve(LocalSearchKind::TwoOpt, &[0, 2, 1, 3], &dm, &config);
/// assert_eq!(off, local);
/// ```
pub fn improve_offloaded(
    kind: LocalSearchKind,
    order: &[usize],
    distances: &DistanceMatrix,
    config: &SearchConfig,
) -> Improvement {
    thread::scope(|scope| {
        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn_scoped(scope, || improve(kind, order, distances, config));

        match spawned {
            Ok(handle) => match handle.join() {
                Ok(result) => result,
                Err(_) => {
                    log::warn!("local-search worker panicked, rerunning in-process");
                    improve(kind, order, distances, config)
                }
            },
            Err(err) => {
                log::warn!("local-search worker unavailable ({err}), running in-process");
                improve(kind, order, distances, config)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> DistanceMatrix {
        let pts: [(f64, f64); 7] = [
            (0.0, 0.0),
            (5.0, 5.0),
            (1.0, 0.0),
            (4.0, 5.0),
            (2.0, 0.0),
            (3.0, 5.0),
            (6.0, 2.0),
        ];
        let mut dm = DistanceMatrix::new(pts.len());
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate() {
                dm.set(i, j, (a.0 - b.0).hypot(a.1 - b.1));
            }
        }
        dm
    }

    #[test]
    fn test_offload_matches_in_process() {
        let dm = zigzag();
        let order: Vec<usize> = (0..7).collect();
        for kind in [
            LocalSearchKind::None,
            LocalSearchKind::TwoOpt,
            LocalSearchKind::ThreeOpt,
        ] {
            for config in [
                SearchConfig::default(),
                SearchConfig::new(3).with_round_trip(false).with_fixed_end(true),
            ] {
                assert_eq!(
                    improve_offloaded(kind, &order, &dm, &config),
                    improve(kind, &order, &dm, &config)
                );
            }
        }
    }
}
