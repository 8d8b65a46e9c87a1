//! Route cost evaluation and route construction.
//!
//! - [`route_cost`] — Cost of an ordering, open path or round trip
//! - [`RouteBuilder`] — Ordering → [`Route`](crate::models::Route) with legs and direction

mod builder;
mod cost;

pub use builder::{classify_direction, RouteBuilder};
pub use cost::route_cost;
