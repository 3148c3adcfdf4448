//! Tile-based rearrangement of raster images
//!
//! An image is cut into a uniform grid of rectangular tiles, and the tiles are
//! reassembled into a new image in a caller-specified order. The ordering is
//! checked against the image and tile sizes before any pixels are touched.

#![forbid(unsafe_code)]

/// Validation, ordering algebra and the rearrangement pipeline
pub mod algorithm;
/// Input/output operations, CLI and error handling
pub mod io;
/// Image and tile geometry, tile extraction and placement
pub mod spatial;

pub use algorithm::rearrange::{rearrange, rearrange_image};
pub use algorithm::validation::is_valid;
pub use io::error::{RearrangeError, Result};
pub use spatial::{ImageSize, TileSize};
