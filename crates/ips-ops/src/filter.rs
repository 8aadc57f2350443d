//! Spatial filtering over small neighborhoods.
//!
//! Every filter computes output pixel (x, y) from the input neighborhood
//! centered on (x, y). Neighbors outside the image are read with
//! clamp-to-edge replication (see [`ips_core::clamp_coord`]), so edge and
//! corner pixels use their nearest in-image neighbors.
//!
//! # Filters
//!
//! - [`box_smooth`] - uniform `(2r+1)^2` average
//! - [`weighted_average`], [`sharpen`], [`emboss`] - 3x3 [`Kernel3`] convolution
//! - [`edge_detect`], [`sobel`], [`prewitt`], [`roberts`] - gradient magnitude
//!   `sqrt(gx^2 + gy^2)` over a kernel pair
//! - [`median`] - 3x3 rank filter
//!
//! Each channel is filtered independently.
//!
//! # Example
//!
//! ```rust
//! use ips_core::BgrImage;
//! use ips_ops::filter;
//!
//! let flat = BgrImage::filled(8, 8, [90, 90, 90]);
//! let edges = filter::sobel(&flat).unwrap();
//! assert!(edges.data().iter().all(|&v| v == 0));
//! ```

use std::fmt;

use ips_core::BgrImage;
use tracing::{debug, trace};

use crate::kernel::{Kernel3, Window3};
use crate::rows::{map_pixels, map_rows, read_clamped};
use crate::{OpsError, OpsResult};

/// Gathers the clamped 3x3 neighborhood of (x, y).
pub fn window3(src: &BgrImage, x: u32, y: u32) -> OpsResult<Window3> {
    let mut win = [[[0u8; 3]; 3]; 3];
    for (dy, row) in (-1i64..=1).zip(win.iter_mut()) {
        for (dx, px) in (-1i64..=1).zip(row.iter_mut()) {
            *px = read_clamped(src, x as i64 + dx, y as i64 + dy)?;
        }
    }
    Ok(win)
}

/// Uniform `(2r+1) x (2r+1)` smoothing.
///
/// Sums every sample in the window and divides by the window area,
/// truncating. `radius = 0` is the identity. A window larger than the
/// image is valid; replication pulls the result toward the border
/// pixels.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `radius` is negative, or so large
/// that a window of 255s would overflow the `i32` accumulator.
///
/// # Example
///
/// ```rust
/// use ips_core::BgrImage;
/// use ips_ops::filter::box_smooth;
///
/// let src = BgrImage::from_fn(5, 1, |x, _| [x as u8 * 10; 3]);
/// let out = box_smooth(&src, 1).unwrap();
/// // (0 + 10 + 20) * 3 rows / 9
/// assert_eq!(out.pixel(1, 0), [10, 10, 10]);
/// assert!(box_smooth(&src, -1).is_err());
/// ```
pub fn box_smooth(src: &BgrImage, radius: i32) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), radius, "box_smooth");
    if radius < 0 {
        return Err(OpsError::InvalidParameter(format!(
            "radius must be >= 0, got {radius}"
        )));
    }
    let side = 2 * radius as i64 + 1;
    let area = side
        .checked_mul(side)
        .filter(|a| a.checked_mul(255).is_some_and(|max| max <= i32::MAX as i64))
        .ok_or_else(|| {
            OpsError::InvalidParameter(format!("radius {radius} overflows the window sum"))
        })? as i32;
    let r = radius as i64;
    debug!(area, "box window");

    map_pixels(src, |x, y| {
        let mut sum = [0i32; 3];
        for dy in -r..=r {
            for dx in -r..=r {
                let px = read_clamped(src, x as i64 + dx, y as i64 + dy)?;
                for (s, &v) in sum.iter_mut().zip(&px) {
                    *s += v as i32;
                }
            }
        }
        Ok(sum.map(|s| (s / area).clamp(0, 255) as u8))
    })
}

/// Convolves with an arbitrary [`Kernel3`].
pub fn convolve(src: &BgrImage, kernel: &Kernel3) -> OpsResult<BgrImage> {
    trace!(
        width = src.width(),
        height = src.height(),
        divisor = kernel.divisor,
        bias = kernel.bias,
        "convolve"
    );
    map_pixels(src, |x, y| Ok(kernel.evaluate_pixel(&window3(src, x, y)?)))
}

/// Gradient magnitude `clamp(sqrt(gx^2 + gy^2), 0, 255)` per channel,
/// where `gx`/`gy` are the raw responses of `kx`/`ky`.
///
/// Divisor and bias of both kernels are ignored.
pub fn gradient_magnitude(src: &BgrImage, kx: &Kernel3, ky: &Kernel3) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), "gradient_magnitude");
    map_pixels(src, |x, y| {
        let win = window3(src, x, y)?;
        let mut out = [0u8; 3];
        for (c, o) in out.iter_mut().enumerate() {
            let gx = kx.response(&win, c) as i64;
            let gy = ky.response(&win, c) as i64;
            *o = ((gx * gx + gy * gy) as f64).sqrt().clamp(0.0, 255.0) as u8;
        }
        Ok(out)
    })
}

/// Center-weighted smoothing, [`Kernel3::WEIGHTED_AVERAGE`].
pub fn weighted_average(src: &BgrImage) -> OpsResult<BgrImage> {
    convolve(src, &Kernel3::WEIGHTED_AVERAGE)
}

/// Laplacian sharpening, [`Kernel3::SHARPEN`].
pub fn sharpen(src: &BgrImage) -> OpsResult<BgrImage> {
    convolve(src, &Kernel3::SHARPEN)
}

/// Relief effect, [`Kernel3::EMBOSS`]. Flat areas come out mid-gray (128).
pub fn emboss(src: &BgrImage) -> OpsResult<BgrImage> {
    convolve(src, &Kernel3::EMBOSS)
}

/// Basic single-tap difference edges.
pub fn edge_detect(src: &BgrImage) -> OpsResult<BgrImage> {
    gradient_magnitude(src, &Kernel3::EDGE_X, &Kernel3::EDGE_Y)
}

/// Sobel edges.
pub fn sobel(src: &BgrImage) -> OpsResult<BgrImage> {
    gradient_magnitude(src, &Kernel3::SOBEL_X, &Kernel3::SOBEL_Y)
}

/// Prewitt edges.
pub fn prewitt(src: &BgrImage) -> OpsResult<BgrImage> {
    gradient_magnitude(src, &Kernel3::PREWITT_X, &Kernel3::PREWITT_Y)
}

/// Roberts cross edges.
pub fn roberts(src: &BgrImage) -> OpsResult<BgrImage> {
    gradient_magnitude(src, &Kernel3::ROBERTS_X, &Kernel3::ROBERTS_Y)
}

/// 3x3 median, per channel.
///
/// A single outlier among nine samples never reaches the output.
pub fn median(src: &BgrImage) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), "median");
    map_rows(src, |y, row| {
        for (x, out) in row.chunks_exact_mut(3).enumerate() {
            let win = window3(src, x as u32, y)?;
            for (c, o) in out.iter_mut().enumerate() {
                let mut taps = [0u8; 9];
                for (t, px) in taps.iter_mut().zip(win.iter().flatten()) {
                    *t = px[c];
                }
                taps.sort_unstable();
                *o = taps[4];
            }
        }
        Ok(())
    })
}

/// A spatial filter and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// [`box_smooth`]
    BoxSmooth {
        /// Window radius
        radius: i32,
    },
    /// [`weighted_average`]
    WeightedAverage,
    /// [`sharpen`]
    Sharpen,
    /// [`edge_detect`]
    EdgeDetect,
    /// [`sobel`]
    Sobel,
    /// [`prewitt`]
    Prewitt,
    /// [`roberts`]
    Roberts,
    /// [`emboss`]
    Emboss,
    /// [`median`]
    Median,
}

impl FilterOp {
    /// Runs the filter on `src`.
    pub fn apply(&self, src: &BgrImage) -> OpsResult<BgrImage> {
        match *self {
            Self::BoxSmooth { radius } => box_smooth(src, radius),
            Self::WeightedAverage => weighted_average(src),
            Self::Sharpen => sharpen(src),
            Self::EdgeDetect => edge_detect(src),
            Self::Sobel => sobel(src),
            Self::Prewitt => prewitt(src),
            Self::Roberts => roberts(src),
            Self::Emboss => emboss(src),
            Self::Median => median(src),
        }
    }

    /// Output-name token for this filter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BoxSmooth { .. } => "EqualizationFilter",
            Self::WeightedAverage => "WeightedAverage",
            Self::Sharpen => "SharpeningFilter",
            Self::EdgeDetect => "EdgeDetectionFilter",
            Self::Sobel => "SobelFilter",
            Self::Prewitt => "PrewittFilter",
            Self::Roberts => "RobertsFilter",
            Self::Emboss => "EmbossingFilter",
            Self::Median => "MedianFilter",
        }
    }

    /// Every parameterless filter plus box smoothing at `radius`.
    pub fn all(radius: i32) -> [FilterOp; 9] {
        [
            Self::BoxSmooth { radius },
            Self::WeightedAverage,
            Self::Sharpen,
            Self::EdgeDetect,
            Self::Sobel,
            Self::Prewitt,
            Self::Roberts,
            Self::Emboss,
            Self::Median,
        ]
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic textured test image.
    fn noise(w: u32, h: u32) -> BgrImage {
        BgrImage::from_fn(w, h, |x, y| {
            let v = x.wrapping_mul(73) ^ y.wrapping_mul(151);
            [v as u8, (v >> 3) as u8 ^ 0x5a, (x * 31 + y * 17) as u8]
        })
    }

    /// Straight nested-loop convolution with explicit clamping.
    fn reference_convolve(src: &BgrImage, k: &Kernel3) -> BgrImage {
        let (w, h) = src.dimensions();
        BgrImage::from_fn(w, h, |x, y| {
            let mut out = [0u8; 3];
            for c in 0..3 {
                let mut sum = 0i32;
                for ky in 0..3i64 {
                    for kx in 0..3i64 {
                        let sx = (x as i64 + kx - 1).clamp(0, w as i64 - 1) as u32;
                        let sy = (y as i64 + ky - 1).clamp(0, h as i64 - 1) as u32;
                        sum += k.weights[ky as usize][kx as usize] * src.pixel(sx, sy)[c] as i32;
                    }
                }
                out[c] = (sum / k.divisor + k.bias).clamp(0, 255) as u8;
            }
            out
        })
    }

    #[test]
    fn test_convolution_matches_reference() {
        let src = noise(7, 5);
        for k in [Kernel3::WEIGHTED_AVERAGE, Kernel3::SHARPEN, Kernel3::EMBOSS] {
            assert_eq!(convolve(&src, &k).unwrap(), reference_convolve(&src, &k));
        }
    }

    #[test]
    fn test_weighted_average_corner() {
        // 10 20
        // 30 40
        let src = BgrImage::from_data(2, 2, vec![10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40]).unwrap();
        let out = weighted_average(&src).unwrap();
        // Clamped window at (0,0):
        // [10 10 20] [10 10 20] [30 30 40] weighted -> 320 / 16
        assert_eq!(out.pixel(0, 0), [20, 20, 20]);
    }

    #[test]
    fn test_sharpen_uniform_unchanged() {
        let src = BgrImage::filled(6, 4, [17, 128, 250]);
        assert_eq!(sharpen(&src).unwrap(), src);
    }

    #[test]
    fn test_emboss_flat_is_mid_gray() {
        let src = BgrImage::filled(5, 5, [0, 99, 255]);
        let out = emboss(&src).unwrap();
        assert!(out.data().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_gradients_zero_on_uniform() {
        let src = BgrImage::filled(9, 7, [200, 13, 77]);
        for f in [edge_detect, sobel, prewitt, roberts] {
            let out = f(&src).unwrap();
            assert!(out.data().iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_sobel_step_edge_with_border() {
        // Column 0 dark, columns 1..3 at 50
        let src = BgrImage::from_fn(3, 3, |x, _| if x == 0 { [0; 3] } else { [50; 3] });
        let out = sobel(&src).unwrap();
        // Right column of each window minus left column: 4 * 50
        assert_eq!(out.pixel(0, 1), [200, 200, 200]);
        assert_eq!(out.pixel(1, 1), [200, 200, 200]);
        assert_eq!(out.pixel(2, 1), [0, 0, 0]);
        // Corners replicate the same columns
        assert_eq!(out.pixel(0, 0), [200, 200, 200]);
        assert_eq!(out.pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn test_gradient_saturates() {
        let src = BgrImage::from_fn(3, 3, |x, _| if x == 0 { [0; 3] } else { [255; 3] });
        assert_eq!(prewitt(&src).unwrap().pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_edge_detect_magnitude() {
        // Single bright pixel at (1,1): edge kernels see one tap each
        let mut src = BgrImage::new(3, 3);
        src.set_pixel(1, 1, [30, 40, 0]);
        let out = edge_detect(&src).unwrap();
        // At (0,1) only EDGE_X's right tap (-1) hits it: |gx| = v
        assert_eq!(out.pixel(0, 1), [30, 40, 0]);
        // At (1,1) no tap covers the center
        assert_eq!(out.pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_median_discards_outlier() {
        let mut src = BgrImage::filled(3, 3, [50, 60, 70]);
        src.set_pixel(1, 1, [255, 0, 255]);
        let out = median(&src).unwrap();
        assert_eq!(out.pixel(1, 1), [50, 60, 70]);
        assert_eq!(median(&BgrImage::filled(3, 3, [9, 9, 9])).unwrap().pixel(1, 1), [9, 9, 9]);
    }

    #[test]
    fn test_median_corner_replication() {
        // Corner (0,0) sees itself 4 times, so a corner value wins the vote
        let mut src = BgrImage::filled(4, 4, [10, 10, 10]);
        src.set_pixel(0, 0, [200, 200, 200]);
        src.set_pixel(1, 0, [200, 200, 200]);
        let out = median(&src).unwrap();
        // Window: 200 x4 (corner), 200 x2 (right neighbor), 10 x3
        assert_eq!(out.pixel(0, 0), [200, 200, 200]);
    }

    #[test]
    fn test_box_smooth_radius_zero_identity() {
        let src = noise(6, 6);
        assert_eq!(box_smooth(&src, 0).unwrap(), src);
    }

    #[test]
    fn test_box_smooth_large_radius_is_valid() {
        let src = BgrImage::from_fn(2, 1, |x, _| if x == 0 { [0; 3] } else { [90; 3] });
        let out = box_smooth(&src, 3).unwrap();
        // x=0: dx in -3..=3 -> four 0s, three 90s = 270 per row, 7 rows / 49
        assert_eq!(out.pixel(0, 0), [38, 38, 38]);
        // x=1: three 0s, four 90s
        assert_eq!(out.pixel(1, 0), [51, 51, 51]);
    }

    #[test]
    fn test_box_smooth_bad_radius() {
        let src = noise(2, 2);
        assert!(matches!(box_smooth(&src, -1), Err(OpsError::InvalidParameter(_))));
        assert!(matches!(box_smooth(&src, 1 << 20), Err(OpsError::InvalidParameter(_))));
        assert!(matches!(box_smooth(&src, i32::MAX), Err(OpsError::InvalidParameter(_))));
    }

    #[test]
    fn test_dimensions_preserved() {
        for (w, h) in [(1, 1), (1, 5), (5, 1), (13, 8)] {
            let src = noise(w, h);
            for op in FilterOp::all(2) {
                assert_eq!(op.apply(&src).unwrap().dimensions(), (w, h), "{op}");
            }
        }
    }

    #[test]
    fn test_empty_image_returns_empty() {
        for (w, h) in [(0, 0), (0, 3), (3, 0)] {
            let src = BgrImage::new(w, h);
            for op in FilterOp::all(1) {
                let out = op.apply(&src).unwrap();
                assert_eq!(out.dimensions(), (w, h));
                assert!(out.data().is_empty());
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(FilterOp::BoxSmooth { radius: 2 }.name(), "EqualizationFilter");
        assert_eq!(FilterOp::Emboss.to_string(), "EmbossingFilter");
    }
}
