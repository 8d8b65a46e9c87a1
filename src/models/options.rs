//! Optimization options.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Local-search refinement applied to every constructed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalSearchKind {
    /// Keep construction output as-is.
    None,
    #[default]
    TwoOpt,
    /// 3-opt; falls back to 2-opt below six stops.
    ThreeOpt,
}

/// Options for one optimization run.
///
/// Every field has a default, so partial JSON is accepted.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Options;
///
/// let opts = Options::from_json(r#"{"maxAlternatives": 3, "startPoint": 2}"#).unwrap();
/// assert_eq!(opts.max_alternatives, 3);
/// assert_eq!(opts.start_point, Some(2));
/// assert!(!opts.round_trip);
///
/// let opts = Options::default().with_round_trip(true).with_end_point(4);
/// assert!(opts.validate(5).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Number of ranked routes wanted (best included).
    pub max_alternatives: usize,
    /// Adds a closing leg from the last stop back to the first.
    pub round_trip: bool,
    /// Location index every route must start at.
    pub start_point: Option<usize>,
    /// Location index every route must end at.
    pub end_point: Option<usize>,
    pub local_search: LocalSearchKind,
    /// Cap on local-search passes per ordering.
    pub max_iterations: usize,
    /// Runs local search on a worker thread, falling back to the caller's
    /// thread when one cannot be started.
    pub offload_local_search: bool,
    /// Extra restarts from seeded shuffles of the free positions.
    pub random_restarts: usize,
    pub seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_alternatives: 12,
            round_trip: false,
            start_point: None,
            end_point: None,
            local_search: LocalSearchKind::TwoOpt,
            max_iterations: 1000,
            offload_local_search: false,
            random_restarts: 0,
            seed: 42,
        }
    }
}

impl Options {
    /// Parses options from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_alternatives(mut self, n: usize) -> Self {
        self.max_alternatives = n;
        self
    }

    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    pub fn with_start_point(mut self, index: usize) -> Self {
        self.start_point = Some(index);
        self
    }

    pub fn with_end_point(mut self, index: usize) -> Self {
        self.end_point = Some(index);
        self
    }

    pub fn with_local_search(mut self, kind: LocalSearchKind) -> Self {
        self.local_search = kind;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_offload(mut self, offload: bool) -> Self {
        self.offload_local_search = offload;
        self
    }

    pub fn with_random_restarts(mut self, restarts: usize, seed: u64) -> Self {
        self.random_restarts = restarts;
        self.seed = seed;
        self
    }

    /// Checks these options against a problem with `n` locations.
    ///
    /// A start equal to the end is rejected rather than left to the repair
    /// passes.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.max_alternatives == 0 {
            return Err(Error::invalid_options("maxAlternatives must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_options("maxIterations must be at least 1"));
        }
        if let Some(start) = self.start_point {
            if start >= n {
                return Err(Error::invalid_input(format!(
                    "start point {start} is out of range for {n} locations"
                )));
            }
        }
        if let Some(end) = self.end_point {
            if end >= n {
                return Err(Error::invalid_input(format!(
                    "end point {end} is out of range for {n} locations"
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.start_point, self.end_point) {
            if start == end {
                return Err(Error::invalid_options(format!(
                    "start and end point are both {start}; use roundTrip for a closed loop"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = Options::default();
        assert_eq!(o.max_alternatives, 12);
        assert!(!o.round_trip);
        assert_eq!(o.local_search, LocalSearchKind::TwoOpt);
        assert_eq!(o.max_iterations, 1000);
        assert!(o.validate(3).is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let o = Options::from_json(
            r#"{"roundTrip": true, "endPoint": 1, "localSearch": "threeOpt"}"#,
        )
        .expect("valid json");
        assert!(o.round_trip);
        assert_eq!(o.end_point, Some(1));
        assert_eq!(o.local_search, LocalSearchKind::ThreeOpt);
        assert_eq!(o.max_alternatives, 12);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Options::from_json("{maxAlternatives"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_alternatives() {
        let o = Options::default().with_max_alternatives(0);
        assert!(matches!(o.validate(4), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let o = Options::default().with_max_iterations(0);
        assert!(matches!(o.validate(4), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_pins() {
        let o = Options::default().with_start_point(4);
        assert!(matches!(o.validate(4), Err(Error::InvalidInput(_))));
        let o = Options::default().with_end_point(9);
        assert!(matches!(o.validate(4), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_same_start_and_end() {
        let o = Options::default().with_start_point(1).with_end_point(1);
        assert!(matches!(o.validate(4), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_builder_chain() {
        let o = Options::default()
            .with_max_alternatives(3)
            .with_start_point(0)
            .with_end_point(2)
            .with_offload(true)
            .with_random_restarts(4, 7);
        assert_eq!(o.max_alternatives, 3);
        assert!(o.offload_local_search);
        assert_eq!((o.random_restarts, o.seed), (4, 7));
        assert!(o.validate(3).is_ok());
    }
}
