//! # route-optimizer
//!
//! Visiting-order optimization for a few dozen stops: given a cost matrix,
//! returns the cheapest ordering found plus a ranked list of distinct
//! alternatives, honouring an optional fixed start and end.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, Leg, Options)
//! - [`distance`] — Square cost matrix and haversine estimates
//! - [`evaluation`] — Route cost and route building with direction labels
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Greedy Insertion)
//! - [`local_search`] — Local search operators (2-opt, 3-opt), optionally on a worker thread
//! - [`multistart`] — Multi-start orchestration, diversity synthesis, endpoint repair
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use route_optimizer::distance::DistanceMatrix;
//! use route_optimizer::models::{Location, Options};
//!
//! let stops = vec![
//!     Location::new("a", "Depot", 37.5665, 126.9780),
//!     Location::new("b", "Market", 37.5700, 126.9920),
//!     Location::new("c", "Station", 37.5547, 126.9707),
//! ];
//! let dm = DistanceMatrix::haversine(&stops);
//! let options = Options::default().with_start_point(0).with_max_alternatives(2);
//!
//! let result = route_optimizer::optimize(&dm, &stops, &options).unwrap();
//! assert_eq!(result.best.order()[0], 0);
//! assert!(result.len() <= 2);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod multistart;
mod optimize;

pub use error::{Error, Result};
pub use optimize::{optimize, Optimization};
