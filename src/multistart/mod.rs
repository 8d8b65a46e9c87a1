//! Multi-start generation of ranked, distinct candidate routes.
//!
//! # Algorithm
//!
//! 1. Run every [`Construction`] heuristic from each start (the pinned start,
//!    or the first five indices other than a pinned end), pin endpoints, and
//!    refine with local search.
//! 2. Optionally add seeded random restarts over the free positions.
//! 3. Sort by cost and drop repeated orderings, keeping the cheapest.
//! 4. If fewer than `max_alternatives` remain, derive variants of the best
//!    ordering ([`diversity::variants`]) until enough distinct ones exist.
//! 5. Re-pin endpoints on every candidate, re-sort, deduplicate, truncate.
//!
//! Candidates compare by exact ordering, so a loop and its reverse are
//! different candidates even at equal cost.

pub mod diversity;
pub mod repair;

use std::collections::HashSet;
use std::ops::Range;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::constructive::Construction;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::{route_cost, RouteBuilder};
use crate::local_search::{improve, improve_offloaded, SearchConfig};
use crate::models::{Location, Options, Route};

use self::repair::{complete_permutation, pin_end, pin_start};

/// Number of start indices tried when no start is pinned.
pub const MAX_STARTS: usize = 5;

/// How a candidate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Origin {
    /// A construction heuristic from a start index, then local search.
    Construction { heuristic: Construction, start: usize },
    /// A seeded shuffle of the free positions, then local search.
    Restart,
    /// A reversal, swap, or rotation of the best ordering.
    Variant,
}

/// An ordering with its cost and built route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub order: Vec<usize>,
    pub cost: f64,
    pub route: Route,
    pub origin: Origin,
}

/// Counters describing one multi-start run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Start indices used.
    pub starts: usize,
    /// Orderings produced by construction heuristics.
    pub constructed: usize,
    /// Heuristic outputs that were partial and had to be completed.
    pub incomplete: usize,
    /// Seeded random restarts.
    pub restarts: usize,
    /// Local-search passes across all refinements.
    pub improvement_passes: usize,
    /// Local-search moves accepted across all refinements.
    pub improvement_moves: usize,
    /// Candidates dropped because their ordering was already present.
    pub duplicates_discarded: usize,
    /// Variants added by diversity synthesis.
    pub synthesized: usize,
    /// Candidates whose endpoints were re-pinned after synthesis.
    pub repaired: usize,
    /// Wall time of the run.
    pub elapsed: Duration,
}

/// Ranked candidates and the counters of the run that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct MultiStartOutcome {
    /// Distinct candidates, ascending by cost.
    pub candidates: Vec<Candidate>,
    pub diagnostics: Diagnostics,
}

/// Multi-start driver bound to one problem instance.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::models::Options;
/// use route_optimizer::multistart::MultiStart;
///
/// let d = std::f64::consts::SQRT_2;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, d, 1.0],
///     vec![1.0, 0.0, 1.0, d],
///     vec![d, 1.0, 0.0, 1.0],
///     vec![1.0, d, 1.0, 0.0],
/// ])
/// .unwrap();
/// let options = Options::default().with_round_trip(true).with_max_alternatives(3);
///
/// let outcome = MultiStart::new(&dm, &[], &options).unwrap().run();
/// assert!(outcome.candidates.len() <= 3);
/// assert!((outcome.candidates[0].cost - 4.0).abs() < 1e-10);
/// ```
pub struct MultiStart<'a> {
    distances: &'a DistanceMatrix,
    options: &'a Options,
    builder: RouteBuilder<'a>,
    search: SearchConfig,
}

impl<'a> MultiStart<'a> {
    /// Binds the driver to a matrix, its locations, and options.
    ///
    /// `locations` must be empty (no direction labels) or have one entry per
    /// matrix row.
    pub fn new(
        distances: &'a DistanceMatrix,
        locations: &'a [Location],
        options: &'a Options,
    ) -> Result<Self> {
        let n = distances.size();
        if !locations.is_empty() && locations.len() != n {
            return Err(Error::invalid_input(format!(
                "{} locations supplied for a {n}x{n} matrix",
                locations.len()
            )));
        }
        options.validate(n)?;

        let search = SearchConfig::new(options.max_iterations)
            .with_round_trip(options.round_trip)
            .with_fixed_end(options.end_point.is_some());

        Ok(Self {
            distances,
            options,
            builder: RouteBuilder::new(distances, locations, options.round_trip),
            search,
        })
    }

    /// Generates, deduplicates, repairs, and ranks candidates.
    pub fn run(&self) -> MultiStartOutcome {
        let started = Instant::now();
        let n = self.distances.size();
        let mut diagnostics = Diagnostics::default();

        let candidates = match n {
            0 => Vec::new(),
            1 => vec![self.candidate(
                vec![0],
                Origin::Construction {
                    heuristic: Construction::NearestNeighbor,
                    start: 0,
                },
            )],
            _ => self.rank(&mut diagnostics),
        };

        diagnostics.elapsed = started.elapsed();
        log::debug!(
            "multi-start finished: {} candidates from {} starts in {:?}",
            candidates.len(),
            diagnostics.starts,
            diagnostics.elapsed
        );
        MultiStartOutcome {
            candidates,
            diagnostics,
        }
    }

    fn rank(&self, diagnostics: &mut Diagnostics) -> Vec<Candidate> {
        let n = self.distances.size();
        let wanted = self.options.max_alternatives;
        let free = self.free_range(n);

        let mut pool = Vec::new();
        let starts = self.starts(n);
        diagnostics.starts = starts.len();
        for &start in &starts {
            for heuristic in Construction::ALL {
                let order = heuristic.build(self.distances, start);
                diagnostics.constructed += 1;
                let candidate =
                    self.refine(order, Origin::Construction { heuristic, start }, diagnostics);
                log::trace!(
                    "{} from {start}: {:?} cost {:.3}",
                    heuristic.name(),
                    candidate.order,
                    candidate.cost
                );
                pool.push(candidate);
            }
        }

        if self.options.random_restarts > 0 {
            let mut rng = StdRng::seed_from_u64(self.options.seed);
            let base = self.pinned((0..n).collect());
            for _ in 0..self.options.random_restarts {
                let order = diversity::shuffled(&base, free.clone(), &mut rng);
                pool.push(self.refine(order, Origin::Restart, diagnostics));
                diagnostics.restarts += 1;
            }
        }

        sort_by_cost(&mut pool);
        let mut unique = dedup_orders(pool, diagnostics);
        log::debug!(
            "{} distinct candidates after construction, {} wanted",
            unique.len(),
            wanted
        );

        if unique.len() < wanted {
            if let Some(best) = unique.first().map(|c| c.order.clone()) {
                let mut seen: HashSet<Vec<usize>> = unique.iter().map(|c| c.order.clone()).collect();
                for variant in diversity::variants(&best, free) {
                    if unique.len() >= wanted {
                        break;
                    }
                    if seen.insert(variant.clone()) {
                        unique.push(self.candidate(variant, Origin::Variant));
                        diagnostics.synthesized += 1;
                    }
                }
            }
        }

        for candidate in unique.iter_mut() {
            let mut order = std::mem::take(&mut candidate.order);
            let changed = self.pin(&mut order);
            if changed {
                let origin = candidate.origin;
                *candidate = self.candidate(order, origin);
                diagnostics.repaired += 1;
            } else {
                candidate.order = order;
            }
        }

        sort_by_cost(&mut unique);
        let mut ranked = dedup_orders(unique, diagnostics);
        ranked.truncate(wanted);
        ranked
    }

    /// Completes, pins, and locally improves a constructed ordering.
    fn refine(&self, mut order: Vec<usize>, origin: Origin, diagnostics: &mut Diagnostics) -> Candidate {
        if complete_permutation(&mut order, self.distances.size()) {
            diagnostics.incomplete += 1;
        }
        self.pin(&mut order);

        let kind = self.options.local_search;
        let improved = if self.options.offload_local_search {
            improve_offloaded(kind, &order, self.distances, &self.search)
        } else {
            improve(kind, &order, self.distances, &self.search)
        };
        diagnostics.improvement_passes += improved.passes;
        diagnostics.improvement_moves += improved.moves;

        self.candidate(improved.order, origin)
    }

    fn candidate(&self, order: Vec<usize>, origin: Origin) -> Candidate {
        let cost = route_cost(&order, self.distances, self.options.round_trip);
        let route = self.builder.build(&order);
        Candidate {
            order,
            cost,
            route,
            origin,
        }
    }

    /// Moves pinned endpoints into place. Returns `true` if `order` changed.
    fn pin(&self, order: &mut Vec<usize>) -> bool {
        let mut changed = false;
        if let Some(start) = self.options.start_point {
            changed |= pin_start(order, start);
        }
        if let Some(end) = self.options.end_point {
            changed |= pin_end(order, end);
        }
        changed
    }

    fn pinned(&self, mut order: Vec<usize>) -> Vec<usize> {
        self.pin(&mut order);
        order
    }

    fn starts(&self, n: usize) -> Vec<usize> {
        match self.options.start_point {
            Some(start) => vec![start],
            None => (0..n)
                .filter(|&i| Some(i) != self.options.end_point)
                .take(MAX_STARTS)
                .collect(),
        }
    }

    fn free_range(&self, n: usize) -> Range<usize> {
        diversity::free_range(
            n,
            self.options.start_point.is_some(),
            self.options.end_point.is_some(),
        )
    }
}

/// Runs [`MultiStart`] once.
pub fn multi_start(
    distances: &DistanceMatrix,
    locations: &[Location],
    options: &Options,
) -> Result<MultiStartOutcome> {
    Ok(MultiStart::new(distances, locations, options)?.run())
}

/// Stable ascending sort by cost.
fn sort_by_cost(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));
}

/// Keeps the first candidate of each distinct ordering.
fn dedup_orders(candidates: Vec<Candidate>, diagnostics: &mut Diagnostics) -> Vec<Candidate> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if seen.insert(candidate.order.clone()) {
            unique.push(candidate);
        } else {
            diagnostics.duplicates_discarded += 1;
        }
    }
    unique
}
