//! Row scheduling for operators with independent output rows.
//!
//! Every operator in this crate reads only its input image and writes each
//! output row exactly once, so rows can be computed in any order. With the
//! `parallel` feature (default) rows are distributed over the rayon pool
//! with `par_chunks_mut`; without it they run in order on the calling
//! thread. Both paths produce identical bytes.
//!
//! # Example
//!
//! ```rust
//! use ips_core::BgrImage;
//! use ips_ops::rows::map_rows;
//!
//! let src = BgrImage::filled(4, 3, [1, 2, 3]);
//! let dst = map_rows(&src, |y, row| {
//!     row.fill(y as u8);
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(dst.pixel(0, 2), [2, 2, 2]);
//! ```

use ips_core::{clamp_coord, Bgr, BgrImage};

use crate::{OpsError, OpsResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Allocates an output of `src`'s dimensions and fills it row by row.
///
/// `f(y, row)` receives the output row index and its `width * 3` bytes.
/// Zero-area images skip the callback and return an empty image.
///
/// # Errors
///
/// The first error returned by `f`.
pub fn map_rows<F>(src: &BgrImage, f: F) -> OpsResult<BgrImage>
where
    F: Fn(u32, &mut [u8]) -> OpsResult<()> + Sync + Send,
{
    let (width, height) = src.dimensions();
    let mut dst = BgrImage::new(width, height);
    if dst.is_empty() {
        return Ok(dst);
    }
    let stride = dst.row_stride();

    #[cfg(feature = "parallel")]
    dst.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| f(y as u32, row))?;

    #[cfg(not(feature = "parallel"))]
    dst.data_mut()
        .chunks_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| f(y as u32, row))?;

    Ok(dst)
}

/// Applies `f` to every channel sample independently.
pub fn map_samples<F>(src: &BgrImage, f: F) -> OpsResult<BgrImage>
where
    F: Fn(u8) -> u8 + Sync + Send,
{
    map_rows(src, |y, row| {
        for (d, &s) in row.iter_mut().zip(src.row(y)) {
            *d = f(s);
        }
        Ok(())
    })
}

/// Fills each output pixel from `f(x, y)`.
pub fn map_pixels<F>(src: &BgrImage, f: F) -> OpsResult<BgrImage>
where
    F: Fn(u32, u32) -> OpsResult<Bgr> + Sync + Send,
{
    map_rows(src, |y, row| {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            px.copy_from_slice(&f(x as u32, y)?);
        }
        Ok(())
    })
}

/// Reads the pixel at signed (x, y) with clamp-to-edge replication.
///
/// # Errors
///
/// [`OpsError::OutOfRange`] if the clamped coordinate still misses the
/// image, which only a zero-area image can cause.
#[inline]
pub fn read_clamped(src: &BgrImage, x: i64, y: i64) -> OpsResult<Bgr> {
    if src.is_empty() {
        return Err(OpsError::OutOfRange(format!(
            "({x}, {y}) read from empty {}x{} image",
            src.width(),
            src.height()
        )));
    }
    let cx = clamp_coord(x, src.width());
    let cy = clamp_coord(y, src.height());
    src.try_pixel(cx as i64, cy as i64)
        .map_err(|e| OpsError::OutOfRange(e.to_string()))
}
