//! Top-level entry point: best route plus ranked alternatives.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Location, Options, Route};
use crate::multistart::{multi_start, Diagnostics};

/// Result of [`optimize`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    /// Cheapest route found.
    pub best: Route,
    /// Remaining distinct routes, ascending by cost. May hold fewer than
    /// `max_alternatives - 1` entries when no more distinct orderings exist.
    pub alternatives: Vec<Route>,
    pub diagnostics: Diagnostics,
}

impl Optimization {
    /// Number of routes returned, `best` included.
    pub fn len(&self) -> usize {
        1 + self.alternatives.len()
    }

    /// Always `false`; an optimization holds at least its best route.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `best` followed by the alternatives.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.best).chain(self.alternatives.iter())
    }

    /// Serializes the result as camelCase JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Finds the cheapest visiting order and up to `max_alternatives - 1`
/// distinct alternatives.
///
/// `locations` may be empty, in which case routes carry no direction label;
/// otherwise it must have one entry per matrix row.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for an empty matrix, a location count mismatch,
///   or a pinned index out of range.
/// - [`Error::InvalidOptions`] for rejected options (see [`Options::validate`]).
/// - [`Error::NoValidRoute`] if no candidate survives.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::models::Options;
/// use route_optimizer::optimize;
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
/// let result = optimize(&dm, &[], &Options::default().with_round_trip(true)).unwrap();
/// assert!((result.best.total_cost() - 4.0).abs() < 1e-10);
/// assert!(result.alternatives.iter().all(|r| r.total_cost() >= result.best.total_cost()));
/// ```
pub fn optimize(
    distances: &DistanceMatrix,
    locations: &[Location],
    options: &Options,
) -> Result<Optimization> {
    if distances.is_empty() {
        return Err(Error::invalid_input("distance matrix is empty"));
    }
    log::debug!(
        "optimizing {} locations (round trip: {}, start: {:?}, end: {:?})",
        distances.size(),
        options.round_trip,
        options.start_point,
        options.end_point
    );

    let outcome = multi_start(distances, locations, options)?;
    let mut routes = outcome.candidates.into_iter().map(|c| c.route);
    let best = routes.next().ok_or(Error::NoValidRoute)?;
    let alternatives: Vec<Route> = routes.collect();

    log::debug!(
        "best cost {:.3} with {} alternatives",
        best.total_cost(),
        alternatives.len()
    );
    Ok(Optimization {
        best,
        alternatives,
        diagnostics: outcome.diagnostics,
    })
}
