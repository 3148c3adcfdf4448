//! Image decoding and PNG encoding
//!
//! Decoders are chosen from the file contents, not the extension, so output
//! written under any name can be read back as input.

use crate::io::configuration::OUTPUT_FORMAT;
use crate::io::error::{RearrangeError, Result};
use crate::spatial::grid::ImageSize;
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{ColorType, DynamicImage, ImageError, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open_reader(path: &Path) -> std::result::Result<ImageReader<BufReader<File>>, ImageError> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)
}

/// Decode the image at `path` in whatever format the codec recognises
///
/// The file is opened, read and closed within this call.
///
/// # Errors
///
/// Returns [`RearrangeError::Decode`] if the file cannot be opened or is not
/// a decodable image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    open_reader(path)
        .and_then(ImageReader::decode)
        .map_err(|source| RearrangeError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Read an image's dimensions from its header without decoding pixels
///
/// # Errors
///
/// Returns [`RearrangeError::Decode`] if the file cannot be opened or its
/// header cannot be parsed
pub fn read_dimensions<P: AsRef<Path>>(path: P) -> Result<ImageSize> {
    let path = path.as_ref();
    open_reader(path)
        .and_then(ImageReader::into_dimensions)
        .map(ImageSize::from)
        .map_err(|source| RearrangeError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Fail early for pixel types PNG cannot store
///
/// PNG has no floating point samples, so 32-bit float images are refused.
///
/// # Errors
///
/// Returns [`RearrangeError::Encode`] for `Rgb32F` and `Rgba32F` images
pub fn ensure_png_encodable<P: AsRef<Path>>(color: ColorType, path: P) -> Result<()> {
    if matches!(color, ColorType::Rgb32F | ColorType::Rgba32F) {
        return Err(RearrangeError::Encode {
            path: path.as_ref().to_path_buf(),
            source: ImageError::Unsupported(UnsupportedError::from_format_and_kind(
                ImageFormatHint::Exact(OUTPUT_FORMAT),
                UnsupportedErrorKind::Color(color.into()),
            )),
        });
    }
    Ok(())
}

/// Encode `image` as PNG at `path`, whatever extension the path carries
///
/// # Errors
///
/// Returns [`RearrangeError::Encode`] if the file cannot be created or the
/// pixel type cannot be stored as PNG. A partially written file may remain.
pub fn save_png<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    ensure_png_encodable(image.color(), path)?;
    image
        .save_with_format(path, OUTPUT_FORMAT)
        .map_err(|source| RearrangeError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
