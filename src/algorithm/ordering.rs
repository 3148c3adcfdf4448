//! Construction and algebra of tile orderings
//!
//! Orderings are destination-indexed: entry `d` names the source tile that
//! lands in destination cell `d`.

use crate::algorithm::validation::is_permutation;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Ordering that leaves every tile in place
pub fn identity(count: usize) -> Vec<usize> {
    (0..count).collect()
}

/// Ordering that reverses the linear tile order
pub fn reversed(count: usize) -> Vec<usize> {
    (0..count).rev().collect()
}

/// Deterministic random ordering for the given seed
pub fn shuffled(count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ordering = identity(count);
    ordering.shuffle(&mut rng);
    ordering
}

/// Ordering that undoes `ordering`
///
/// Returns `None` if `ordering` is not a permutation of `0..ordering.len()`.
pub fn inverse(ordering: &[usize]) -> Option<Vec<usize>> {
    if !is_permutation(ordering, ordering.len()) {
        return None;
    }

    let mut inverted = vec![0; ordering.len()];
    for (destination, &source) in ordering.iter().enumerate() {
        if let Some(slot) = inverted.get_mut(source) {
            *slot = destination;
        }
    }
    Some(inverted)
}

/// Single ordering equivalent to rearranging by `first`, then by `second`
///
/// Returns `None` if the lengths differ or `second` refers past the end of
/// `first`.
pub fn compose(first: &[usize], second: &[usize]) -> Option<Vec<usize>> {
    if first.len() != second.len() {
        return None;
    }

    second
        .iter()
        .map(|&index| first.get(index).copied())
        .collect()
}

/// Render an ordering as a comma separated list, as accepted by the CLI
pub fn format_ordering(ordering: &[usize]) -> String {
    ordering
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
