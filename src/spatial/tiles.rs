//! Tile extraction from a source buffer and reassembly into a fresh one
//!
//! Both directions walk the grid through [`TileGrid`], so the tile stored at
//! position `i` of the extracted list always came from grid cell `i`.

use crate::io::error::{RearrangeError, Result};
use crate::spatial::grid::TileGrid;
use image::{ImageBuffer, Pixel, imageops};

/// Owned pixel buffer of any pixel type
pub type PixelBuffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// A rectangular cell cut from the source image
#[derive(Clone)]
pub struct Tile<P: Pixel> {
    /// Column and row of the cell this tile was cut from
    pub grid_position: (u32, u32),
    /// Pixel offset of the tile's top-left corner in the source image
    pub origin: (u32, u32),
    /// Copy of the tile's pixels
    pub pixels: PixelBuffer<P>,
}

/// Cut every grid cell out of `image`, in linear cell order
///
/// The grid must have been built from this image's dimensions.
pub fn extract_tiles<P: Pixel>(image: &PixelBuffer<P>, grid: &TileGrid) -> Vec<Tile<P>> {
    let tile_size = grid.tile_size();
    let mut tiles = Vec::with_capacity(grid.tile_count());

    for x in 0..grid.columns() {
        for y in 0..grid.rows() {
            let (origin_x, origin_y) = grid.origin(grid.linear_index(x, y));
            let pixels = ImageBuffer::from_fn(tile_size.width, tile_size.height, |dx, dy| {
                *image.get_pixel(origin_x + dx, origin_y + dy)
            });

            tiles.push(Tile {
                grid_position: (x, y),
                origin: (origin_x, origin_y),
                pixels,
            });
        }
    }

    // Position in the list is the linear index, independent of loop nesting
    tiles.sort_unstable_by_key(|tile| {
        let (x, y) = tile.grid_position;
        grid.linear_index(x, y)
    });
    tiles
}

/// Place tiles into a newly allocated buffer, destination-indexed
///
/// Cell `d` of the output receives `tiles[ordering[d]]`. The source buffer is
/// never written, so no tile can be overwritten before it has been read.
/// `on_tile` is called with `(placed, total)` after each cell is filled.
///
/// The ordering is expected to have passed validation already; only its
/// length and index bounds are checked here.
///
/// # Errors
///
/// Returns [`RearrangeError::InvalidArguments`] if the tile list or ordering
/// does not match the grid's tile count, or an ordering entry is out of range
pub fn assemble<P, F>(
    tiles: &[Tile<P>],
    grid: &TileGrid,
    ordering: &[usize],
    mut on_tile: F,
) -> Result<PixelBuffer<P>>
where
    P: Pixel,
    F: FnMut(usize, usize),
{
    let total = grid.tile_count();
    if tiles.len() != total || ordering.len() != total {
        return Err(RearrangeError::InvalidArguments);
    }

    let image_size = grid.image_size();
    let mut output = PixelBuffer::<P>::new(image_size.width, image_size.height);

    for (destination, &source) in ordering.iter().enumerate() {
        let tile = tiles.get(source).ok_or(RearrangeError::InvalidArguments)?;
        let (x, y) = grid.origin(destination);
        imageops::replace(&mut output, &tile.pixels, i64::from(x), i64::from(y));
        on_tile(destination + 1, total);
    }

    Ok(output)
}
