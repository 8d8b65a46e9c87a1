//! Domain model types for route ordering.
//!
//! Locations are opaque stops addressed by index, routes are ordered
//! sequences of legs with a total cost, and options configure one run.

mod location;
mod options;
mod route;

pub use location::{Location, EARTH_RADIUS_KM};
pub use options::{LocalSearchKind, Options};
pub use route::{sort_by_display_distance, Direction, Leg, MetricsSource, RoadMetrics, Route};
