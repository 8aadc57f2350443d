//! # ips-io
//!
//! Decode/encode boundary between image files and [`BgrImage`].
//!
//! Codecs come from the `image` crate (BMP, PNG, JPEG, TIFF). Decoded
//! pixels are converted to 8-bit RGB, alpha is dropped, and channels are
//! reordered to BGR. Writing reverses the reorder and picks the encoder
//! from the file extension.
//!
//! # Example
//!
//! ```rust,ignore
//! let img = ips_io::read("data/Girl.bmp")?;
//! ips_io::write("output/outimg_None.bmp", &img)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod format;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use ips_core::BgrImage;
use tracing::debug;

pub use error::{IoError, IoResult};
pub use format::Format;

/// Reads an image file into a [`BgrImage`].
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not one of BMP, PNG, JPEG, TIFF
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<BgrImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    let image_format = format.image_format().ok_or_else(|| unsupported(path))?;

    let reader = BufReader::new(File::open(path)?);
    let img = ImageReader::with_format(reader, image_format)
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    debug!(path = %path.display(), ?format, color = ?img.color(), "decoded");

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(BgrImage::from_rgb(width, height, rgb.into_raw())?)
}

/// Writes a [`BgrImage`], choosing the encoder by extension.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not a supported format
/// - The file cannot be created
/// - The encoder rejects the image (e.g. zero area)
pub fn write<P: AsRef<Path>>(path: P, image: &BgrImage) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    let image_format = format.image_format().ok_or_else(|| unsupported(path))?;

    let rgb = RgbImage::from_raw(image.width(), image.height(), image.to_rgb())
        .ok_or_else(|| IoError::Encode("buffer does not match dimensions".into()))?;

    let mut writer = BufWriter::new(File::create(path)?);
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut writer, image_format)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    debug!(path = %path.display(), ?format, "encoded");
    Ok(())
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}
