//! Output, logging and progress defaults

use image::ImageFormat;

/// Message carried by [`crate::RearrangeError::InvalidArguments`]
pub const INVALID_ARGUMENTS_MESSAGE: &str =
    "The tile size or ordering are not valid for the given image";

// Output is always PNG, whatever the source format was
/// Encoding used for every output image
pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;
/// Suffix added to output filenames when no output path is given
pub const OUTPUT_SUFFIX: &str = "_rearranged";
/// Extension of generated output filenames
pub const OUTPUT_EXTENSION: &str = "png";

/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

/// Filter used when `RUST_LOG` is unset and no `-v` flag is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Grids with fewer tiles than this finish too quickly to warrant a bar
pub const PROGRESS_MIN_TILES: usize = 64;
