//! Constructive heuristics for building an initial ordering.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor extension, O(n²)
//! - [`greedy_insertion`] — Cheapest insertion, O(n³)
//!
//! Both are deterministic for a given `(matrix, start)` pair; ties go to the
//! lowest location index.

mod greedy_insertion;
mod nearest_neighbor;

pub use greedy_insertion::{greedy_insertion, insertion_cost};
pub use nearest_neighbor::nearest_neighbor;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

/// A construction heuristic the multi-start driver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Construction {
    NearestNeighbor,
    GreedyInsertion,
}

impl Construction {
    /// All heuristics, in the order the multi-start driver runs them.
    pub const ALL: [Construction; 2] = [Construction::NearestNeighbor, Construction::GreedyInsertion];

    /// Builds an ordering from `start`.
    pub fn build(self, distances: &DistanceMatrix, start: usize) -> Vec<usize> {
        match self {
            Construction::NearestNeighbor => nearest_neighbor(distances, start),
            Construction::GreedyInsertion => greedy_insertion(distances, start),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Construction::NearestNeighbor => "nearest-neighbor",
            Construction::GreedyInsertion => "greedy-insertion",
        }
    }
}
