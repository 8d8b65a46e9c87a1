//! Route builder that turns an ordering into legs, cost, and direction.

use std::f64::consts::PI;

use crate::distance::DistanceMatrix;
use crate::models::{Direction, Leg, Location, Route};

/// How strongly one rotational sense must outnumber the other.
const DIRECTION_DOMINANCE: f64 = 1.5;

/// Builds [`Route`]s from orderings against one matrix.
///
/// `locations` is only read for the advisory direction label; pass an empty
/// slice to skip it.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::RouteBuilder;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
///
/// let open = RouteBuilder::new(&dm, &[], false).build(&[0, 1, 2]);
/// assert_eq!(open.legs().len(), 2);
/// assert_eq!(open.total_cost(), 8.0);
///
/// let closed = RouteBuilder::new(&dm, &[], true).build(&[0, 1, 2]);
/// assert_eq!(closed.legs().len(), 3);
/// assert_eq!(closed.total_cost(), 12.0);
/// ```
pub struct RouteBuilder<'a> {
    distances: &'a DistanceMatrix,
    locations: &'a [Location],
    round_trip: bool,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(distances: &'a DistanceMatrix, locations: &'a [Location], round_trip: bool) -> Self {
        Self {
            distances,
            locations,
            round_trip,
        }
    }

    pub fn round_trip(&self) -> bool {
        self.round_trip
    }

    /// Builds a route visiting `order`.
    ///
    /// An order that already repeats its first stop at the end has that
    /// repeat dropped: a round trip adds its own closing leg, and an open
    /// path must not loop back.
    pub fn build(&self, order: &[usize]) -> Route {
        let mut order = order.to_vec();
        if order.len() > 1 && order.first() == order.last() {
            order.pop();
        }

        if order.len() < 2 {
            let direction = self.direction_of(&order);
            return Route::new(order, Vec::new(), direction);
        }

        let mut legs = Vec::with_capacity(order.len());
        for pair in order.windows(2) {
            legs.push(self.leg(pair[0], pair[1]));
        }
        if self.round_trip {
            legs.push(self.leg(order[order.len() - 1], order[0]));
        }

        let direction = self.direction_of(&order);
        Route::new(order, legs, direction)
    }

    fn leg(&self, from: usize, to: usize) -> Leg {
        Leg {
            from,
            to,
            distance: self.distances.get(from, to),
        }
    }

    fn direction_of(&self, order: &[usize]) -> Option<Direction> {
        if self.locations.is_empty() {
            return None;
        }
        classify_direction(self.locations, order)
    }
}

/// Labels the rotational sense of `order` around the centroid of all
/// `locations`.
///
/// Each step between consecutive stops counts as clockwise when the angle
/// from the centroid advances by less than half a turn, anti-clockwise
/// otherwise. Returns `None` if `order` references an index outside
/// `locations`.
pub fn classify_direction(locations: &[Location], order: &[usize]) -> Option<Direction> {
    if order.iter().any(|&i| i >= locations.len()) {
        return None;
    }
    if order.len() < 3 {
        return Some(Direction::Hybrid);
    }

    let n = locations.len() as f64;
    let c_lat = locations.iter().map(Location::lat).sum::<f64>() / n;
    let c_lng = locations.iter().map(Location::lng).sum::<f64>() / n;

    let angles: Vec<f64> = order
        .iter()
        .map(|&i| (locations[i].lng() - c_lng).atan2(locations[i].lat() - c_lat))
        .collect();

    let mut clockwise = 0usize;
    let mut anti_clockwise = 0usize;
    for pair in angles.windows(2) {
        let diff = (pair[1] - pair[0]).rem_euclid(2.0 * PI);
        if diff < PI {
            clockwise += 1;
        } else {
            anti_clockwise += 1;
        }
    }

    let (cw, acw) = (clockwise as f64, anti_clockwise as f64);
    let direction = if cw >= acw * DIRECTION_DOMINANCE {
        Direction::Clockwise
    } else if acw >= cw * DIRECTION_DOMINANCE {
        Direction::AntiClockwise
    } else {
        Direction::Hybrid
    };
    Some(direction)
}
