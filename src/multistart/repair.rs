//! Endpoint and permutation repair for candidate orderings.
//!
//! Repairs use linear scans; orderings are at most a few dozen stops.

/// Moves `start` to the front, keeping the relative order of the rest.
///
/// Inserts `start` if it is missing. Returns `true` if `order` changed.
pub fn pin_start(order: &mut Vec<usize>, start: usize) -> bool {
    if order.first() == Some(&start) {
        return false;
    }
    if let Some(pos) = order.iter().position(|&i| i == start) {
        order.remove(pos);
    }
    order.insert(0, start);
    true
}

/// Moves `end` to the back, keeping the relative order of the rest.
///
/// Appends `end` if it is missing. Returns `true` if `order` changed.
pub fn pin_end(order: &mut Vec<usize>, end: usize) -> bool {
    if order.last() == Some(&end) {
        return false;
    }
    order.retain(|&i| i != end);
    order.push(end);
    true
}

/// Turns `order` into a permutation of `0..n`.
///
/// Drops repeated and out-of-range indices (keeping first occurrences) and
/// appends missing indices in ascending order. Returns `true` if `order`
/// changed.
pub fn complete_permutation(order: &mut Vec<usize>, n: usize) -> bool {
    let mut seen = vec![false; n];
    let before = order.len();
    order.retain(|&i| {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
        true
    });
    let mut changed = order.len() != before;
    for (i, present) in seen.iter().enumerate() {
        if !present {
            order.push(i);
            changed = true;
        }
    }
    changed
}

/// Returns `true` if `order` is a permutation of `0..n`.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
