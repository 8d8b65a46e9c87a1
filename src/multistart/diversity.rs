//! Diverse variants of an ordering that leave pinned positions alone.
//!
//! Variants are produced in a fixed order so runs are reproducible:
//! segment reversals, then adjacent swaps, then rotations of the free
//! segment.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Positions of an `n`-stop ordering that variants may move.
pub fn free_range(n: usize, pinned_start: bool, pinned_end: bool) -> Range<usize> {
    let lo = usize::from(pinned_start).min(n);
    let hi = if pinned_end { n.saturating_sub(1) } else { n };
    lo..hi.max(lo)
}

/// Reverses every sub-segment `base[i..=j]` with `lo ≤ i < j < hi`, shortest
/// offsets from the left first.
pub fn segment_reversals<'a>(
    base: &'a [usize],
    free: Range<usize>,
) -> impl Iterator<Item = Vec<usize>> + 'a {
    let Range { start: lo, end: hi } = free;
    (lo..hi).flat_map(move |i| {
        ((i + 1)..hi).map(move |j| {
            let mut v = base.to_vec();
            v[i..=j].reverse();
            v
        })
    })
}

/// Swaps each adjacent pair inside the free range.
pub fn adjacent_swaps<'a>(
    base: &'a [usize],
    free: Range<usize>,
) -> impl Iterator<Item = Vec<usize>> + 'a {
    let Range { start: lo, end: hi } = free;
    (lo..hi.saturating_sub(1)).map(move |i| {
        let mut v = base.to_vec();
        v.swap(i, i + 1);
        v
    })
}

/// Rotates the free segment left by 1, 2, … positions.
pub fn rotations<'a>(
    base: &'a [usize],
    free: Range<usize>,
) -> impl Iterator<Item = Vec<usize>> + 'a {
    let Range { start: lo, end: hi } = free;
    (1..hi.saturating_sub(lo)).map(move |shift| {
        let mut v = base.to_vec();
        v[lo..hi].rotate_left(shift);
        v
    })
}

/// All variants of `base`: reversals, then swaps, then rotations.
///
/// May repeat an ordering (for instance a swap that equals a two-element
/// reversal); callers deduplicate.
pub fn variants<'a>(
    base: &'a [usize],
    free: Range<usize>,
) -> impl Iterator<Item = Vec<usize>> + 'a {
    segment_reversals(base, free.clone())
        .chain(adjacent_swaps(base, free.clone()))
        .chain(rotations(base, free))
}

/// Copy of `base` with the free segment shuffled.
pub fn shuffled(base: &[usize], free: Range<usize>, rng: &mut StdRng) -> Vec<usize> {
    let mut v = base.to_vec();
    v[free].shuffle(rng);
    v
}
