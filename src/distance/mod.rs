//! Distance matrices.
//!
//! Provides the dense cost matrix every heuristic reads from.

mod matrix;

pub use matrix::DistanceMatrix;
