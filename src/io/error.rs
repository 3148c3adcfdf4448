//! Error types for tile validation, rearrangement and image I/O

use crate::io::configuration::INVALID_ARGUMENTS_MESSAGE;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all rearrangement operations
#[derive(Debug)]
pub enum RearrangeError {
    /// Tile size does not evenly divide the image, or the ordering is not an
    /// exact permutation of the tile indices
    ///
    /// Raised before any output is written, so the caller can retry with
    /// corrected arguments.
    InvalidArguments,

    /// Failed to read or decode the source image
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or write the output image
    Encode {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// User supplied text could not be interpreted
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for RearrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments => f.write_str(INVALID_ARGUMENTS_MESSAGE),
            Self::Decode { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "Failed to write image to '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for RearrangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::InvalidArguments | Self::InvalidParameter { .. } => None,
        }
    }
}

impl RearrangeError {
    /// Whether the error came from reading or writing an image file
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Encode { .. })
    }
}

/// Result type for rearrangement operations
pub type Result<T> = std::result::Result<T, RearrangeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RearrangeError {
    RearrangeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
