//! Image and tile geometry, and the linear order of grid cells
//!
//! Cells are enumerated column-major: the outer loop runs over columns, the
//! inner loop over rows. [`TileGrid::linear_index`] and
//! [`TileGrid::coordinates`] are the only places that order is spelled out,
//! so tile extraction and placement cannot disagree about it.

use crate::io::error::{RearrangeError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Pixel dimensions of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageSize {
    /// Create an image size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Pixel dimensions of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TileSize {
    /// Create a tile size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a square tile size
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TileSize {
    type Err = RearrangeError;

    /// Parse `"WxH"`, or a single `"N"` for a square tile
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_side = |side: &str| {
            side.trim()
                .parse::<u32>()
                .ok()
                .filter(|&value| value > 0)
                .ok_or_else(|| {
                    invalid_parameter("tile-size", &s, &"dimensions must be positive integers")
                })
        };

        match s.split_once(['x', 'X']) {
            Some((width, height)) => Ok(Self::new(parse_side(width)?, parse_side(height)?)),
            None => parse_side(s).map(Self::square),
        }
    }
}

/// Uniform grid of tiles that exactly covers an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    image_size: ImageSize,
    tile_size: TileSize,
    columns: u32,
    rows: u32,
}

impl TileGrid {
    /// Build the grid, or `None` if either size has a zero dimension or the
    /// tile size leaves a remainder in either dimension
    pub const fn new(image_size: ImageSize, tile_size: TileSize) -> Option<Self> {
        if tile_size.width == 0 || tile_size.height == 0 {
            return None;
        }
        if image_size.width == 0 || image_size.height == 0 {
            return None;
        }
        if image_size.width % tile_size.width != 0 || image_size.height % tile_size.height != 0 {
            return None;
        }

        Some(Self {
            image_size,
            tile_size,
            columns: image_size.width / tile_size.width,
            rows: image_size.height / tile_size.height,
        })
    }

    /// Size of the image the grid covers
    pub const fn image_size(&self) -> ImageSize {
        self.image_size
    }

    /// Size of each tile
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Number of tiles across
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tiles down
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Linear index of the cell in column `x`, row `y`
    pub const fn linear_index(&self, x: u32, y: u32) -> usize {
        x as usize * self.rows as usize + y as usize
    }

    /// Column and row of the cell at a linear index
    pub const fn coordinates(&self, index: usize) -> (u32, u32) {
        let rows = self.rows as usize;
        ((index / rows) as u32, (index % rows) as u32)
    }

    /// Pixel offset of the top-left corner of the cell at a linear index
    pub const fn origin(&self, index: usize) -> (u32, u32) {
        let (x, y) = self.coordinates(index);
        (x * self.tile_size.width, y * self.tile_size.height)
    }

    /// All cell indices in linear order
    pub const fn cells(&self) -> std::ops::Range<usize> {
        0..self.tile_count()
    }
}

