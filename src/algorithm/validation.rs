//! Consistency check between image size, tile size and ordering
//!
//! [`is_valid`] is a pure predicate: no logging and no side effects, so it can
//! be called on its own before any I/O is attempted.

use crate::io::error::{RearrangeError, Result};
use crate::spatial::grid::{ImageSize, TileGrid, TileSize};
use bitvec::prelude::*;

/// Whether `ordering` can rearrange an image of `image_size` cut into tiles
/// of `tile_size`
///
/// True only when the tile size divides both image dimensions without a
/// remainder and `ordering` uses every tile index exactly once.
pub fn is_valid(image_size: ImageSize, tile_size: TileSize, ordering: &[usize]) -> bool {
    TileGrid::new(image_size, tile_size)
        .is_some_and(|grid| is_permutation(ordering, grid.tile_count()))
}

/// Whether `ordering` contains each of `0..count` exactly once
///
/// Checked as a set: matching length and maximum are not enough, since an
/// ordering with a repeated index then has a gap somewhere else.
pub fn is_permutation(ordering: &[usize], count: usize) -> bool {
    if ordering.len() != count {
        return false;
    }

    let mut seen = bitvec![0; count];
    ordering
        .iter()
        .all(|&index| index < count && !seen.replace(index, true))
}

/// Validation gate used before any tile is touched
///
/// # Errors
///
/// Returns [`RearrangeError::InvalidArguments`] when [`is_valid`] would
/// return false
pub fn validate(image_size: ImageSize, tile_size: TileSize, ordering: &[usize]) -> Result<TileGrid> {
    TileGrid::new(image_size, tile_size)
        .filter(|grid| is_permutation(ordering, grid.tile_count()))
        .ok_or(RearrangeError::InvalidArguments)
}
