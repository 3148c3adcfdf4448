//! Spatial data structures for tiling an image
//!
//! This module contains:
//! - Image and tile geometry, and the grid's linear cell order
//! - Tile extraction and reassembly

/// Image and tile sizes, and the tile grid
pub mod grid;
/// Tile extraction and placement
pub mod tiles;

pub use grid::{ImageSize, TileGrid, TileSize};
pub use tiles::Tile;
