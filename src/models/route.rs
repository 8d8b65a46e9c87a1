//! Route, leg, and road-metrics types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One directed hop between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Location index the leg departs from.
    pub from: usize,
    /// Location index the leg arrives at.
    pub to: usize,
    /// Matrix cost of the hop.
    pub distance: f64,
}

/// Rotational sense of a route around the centroid of all locations.
///
/// Advisory only: never consulted by cost evaluation or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Clockwise,
    AntiClockwise,
    Hybrid,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Clockwise => "clockwise",
            Direction::AntiClockwise => "anti-clockwise",
            Direction::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

/// Where a [`RoadMetrics`] overlay came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsSource {
    /// Measured by a road-network routing service.
    Osrm,
    /// Estimated without a routing service.
    Estimate,
}

/// Road distance and duration attached to a route after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadMetrics {
    pub km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    pub source: MetricsSource,
}

/// A visiting order with its legs and total cost.
///
/// Built by [`RouteBuilder`](crate::evaluation::RouteBuilder). `legs[i]`
/// connects `order[i]` to `order[i + 1]`; a round trip carries one extra
/// closing leg from the last stop back to the first. The only part that can
/// change after construction is the [`RoadMetrics`] overlay.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::evaluation::RouteBuilder;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 5.0],
///     vec![2.0, 0.0, 3.0],
///     vec![5.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let route = RouteBuilder::new(&dm, &[], true).build(&[0, 1, 2]);
/// assert_eq!(route.order(), &[0, 1, 2]);
/// assert_eq!(route.legs().len(), 3);
/// assert_eq!(route.total_cost(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    order: Vec<usize>,
    total_cost: f64,
    legs: Vec<Leg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metrics: Option<RoadMetrics>,
}

impl Route {
    /// Assembles a route; the total is the left-to-right sum of `legs`.
    pub(crate) fn new(order: Vec<usize>, legs: Vec<Leg>, direction: Option<Direction>) -> Self {
        let total_cost = legs.iter().fold(0.0, |acc, leg| acc + leg.distance);
        Self {
            order,
            total_cost,
            legs,
            direction,
            metrics: None,
        }
    }

    /// Location indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Sum of all leg distances, including the closing leg of a round trip.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn metrics(&self) -> Option<&RoadMetrics> {
        self.metrics.as_ref()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the last leg closes the loop back to the first stop.
    pub fn is_round_trip(&self) -> bool {
        self.order.len() > 1 && self.legs.len() == self.order.len()
    }

    /// Attaches road metrics measured by an external routing service.
    ///
    /// The overlay is display data only and does not change `total_cost`.
    pub fn attach_metrics(&mut self, metrics: RoadMetrics) {
        self.metrics = Some(metrics);
    }

    /// Distance to show a user: road km when measured, matrix cost otherwise.
    pub fn display_km(&self) -> f64 {
        self.metrics.map_or(self.total_cost, |m| m.km)
    }
}

/// Sorts routes ascending by [`Route::display_km`].
///
/// Used once road metrics have been attached, since measured road distances
/// can reorder routes ranked by matrix cost. The sort is stable.
pub fn sort_by_display_distance(routes: &mut [Route]) {
    routes.sort_by(|a, b| a.display_km().total_cmp(&b.display_km()));
}
