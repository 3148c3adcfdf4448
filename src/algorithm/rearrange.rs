//! Rearrangement of an image's tiles according to an ordering
//!
//! The pipeline is strictly sequential: decode, validate, extract every tile,
//! place the tiles into a new buffer, encode as PNG. Validation runs before
//! any tile is cut or any file is created, so invalid arguments never leave
//! output behind.

use crate::algorithm::validation::validate;
use crate::io::error::Result;
use crate::io::image::{ensure_png_encodable, load_image, save_png};
use crate::spatial::grid::{ImageSize, TileGrid, TileSize};
use crate::spatial::tiles::{PixelBuffer, assemble, extract_tiles};
use image::{DynamicImage, Pixel};
use std::path::Path;

/// Rearrange the tiles of the image at `image_path` and write a PNG to
/// `out_path`
///
/// Cell `d` of the output holds the source tile `ordering[d]`, with tiles
/// numbered column by column.
///
/// # Errors
///
/// Returns an error if:
/// - The source image cannot be read or decoded
/// - The tile size or ordering are not valid for the image's size, in which
///   case no output file is created
/// - The source has 32-bit float pixels, which PNG cannot store; this is
///   reported as an encode error before any tile is cut or file created
/// - The output image cannot be written
pub fn rearrange<I, O>(image_path: I, tile_size: TileSize, ordering: &[usize], out_path: O) -> Result<()>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    rearrange_with_progress(image_path, tile_size, ordering, out_path, |_, _| {})
}

/// [`rearrange`], reporting `(placed, total)` after each tile is placed
///
/// # Errors
///
/// Same as [`rearrange`]
pub fn rearrange_with_progress<I, O, F>(
    image_path: I,
    tile_size: TileSize,
    ordering: &[usize],
    out_path: O,
    on_tile: F,
) -> Result<()>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
    F: FnMut(usize, usize),
{
    let image_path = image_path.as_ref();
    let out_path = out_path.as_ref();

    let source = load_image(image_path)?;
    tracing::debug!(
        path = %image_path.display(),
        width = source.width(),
        height = source.height(),
        color = ?source.color(),
        "Decoded source image"
    );
    ensure_png_encodable(source.color(), out_path)?;

    let output = rearrange_image_with_progress(&source, tile_size, ordering, on_tile)?;
    drop(source);

    save_png(&output, out_path)?;
    tracing::info!(
        source = %image_path.display(),
        output = %out_path.display(),
        tiles = ordering.len(),
        "Wrote rearranged image"
    );

    Ok(())
}

/// Rearrange the tiles of an in-memory image
///
/// The result has the same dimensions and pixel type as `image`. Pixel types
/// the codec adds in future are converted to 8-bit RGBA.
///
/// # Errors
///
/// Returns [`crate::RearrangeError::InvalidArguments`] if the tile size or
/// ordering are not valid for the image's size
pub fn rearrange_image(
    image: &DynamicImage,
    tile_size: TileSize,
    ordering: &[usize],
) -> Result<DynamicImage> {
    rearrange_image_with_progress(image, tile_size, ordering, |_, _| {})
}

/// [`rearrange_image`], reporting `(placed, total)` after each tile is placed
///
/// # Errors
///
/// Same as [`rearrange_image`]
pub fn rearrange_image_with_progress<F>(
    image: &DynamicImage,
    tile_size: TileSize,
    ordering: &[usize],
    on_tile: F,
) -> Result<DynamicImage>
where
    F: FnMut(usize, usize),
{
    let grid = validate(
        ImageSize::new(image.width(), image.height()),
        tile_size,
        ordering,
    )?;
    tracing::debug!(
        tile_size = %tile_size,
        columns = grid.columns(),
        rows = grid.rows(),
        "Tile grid"
    );

    let rearranged = match image {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageLuma8(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            DynamicImage::ImageLumaA8(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgb8(buffer) => {
            DynamicImage::ImageRgb8(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgba8(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageLuma16(buffer) => {
            DynamicImage::ImageLuma16(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageLumaA16(buffer) => {
            DynamicImage::ImageLumaA16(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgb16(buffer) => {
            DynamicImage::ImageRgb16(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgba16(buffer) => {
            DynamicImage::ImageRgba16(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            DynamicImage::ImageRgb32F(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            DynamicImage::ImageRgba32F(permute_buffer(buffer, &grid, ordering, on_tile)?)
        }
        other => {
            DynamicImage::ImageRgba8(permute_buffer(&other.to_rgba8(), &grid, ordering, on_tile)?)
        }
    };

    Ok(rearranged)
}

fn permute_buffer<P, F>(
    buffer: &PixelBuffer<P>,
    grid: &TileGrid,
    ordering: &[usize],
    on_tile: F,
) -> Result<PixelBuffer<P>>
where
    P: Pixel,
    F: FnMut(usize, usize),
{
    let tiles = extract_tiles(buffer, grid);
    assemble(&tiles, grid, ordering, on_tile)
}
