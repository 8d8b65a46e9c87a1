//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Location;

/// A dense n×n cost matrix stored in row-major order.
///
/// `get(i, j)` is the travel cost from location `i` to location `j`. The
/// matrix need not be symmetric. Entries are non-negative; `f64::INFINITY`
/// marks an unreachable pair.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 3.0],
///     vec![8.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a matrix from nested rows, as delivered by a matrix provider.
    ///
    /// Fails if the rows are ragged or any entry is NaN or negative.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_input(format!(
                    "matrix row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a distance matrix from a flat row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "matrix data has {} entries, expected {}",
                data.len(),
                size * size
            )));
        }
        if let Some(pos) = data.iter().position(|d| d.is_nan() || *d < 0.0) {
            return Err(Error::invalid_input(format!(
                "matrix entry ({}, {}) is {}, costs must be non-negative",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Estimates a kilometre matrix from coordinates with the haversine
    /// formula, for use when no road-network service is reachable.
    pub fn haversine(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].haversine_km(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` from `from`; ties keep the
    /// earliest candidate.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Returns the location farthest from `from`, excluding `from` itself.
    ///
    /// Ties keep the lowest index. Returns `None` for matrices with fewer
    /// than two locations.
    pub fn farthest_from(&self, from: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for i in (0..self.size).filter(|&i| i != from) {
            let d = self.get(from, i);
            if best.map_or(true, |(_, bd)| d > bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}
