//! Pixel-wise intensity mapping.
//!
//! Every operator here computes each output sample from the matching
//! input sample alone, identically on all three channels. Results are
//! saturated to `[0, 255]`.
//!
//! | Operator | Output |
//! |---|---|
//! | [`tone_scale`] | `v * coeff` |
//! | [`linear`] | `a * v + b` |
//! | [`negative`] | `255 - v` |
//! | [`gamma`] | `LUT[v]`, `LUT[i] = (i/255)^gamma * 255` |
//! | [`sigmoid`] | `LUT[v]`, `LUT[i] = 255 / (1 + exp(-k (i/255 - x0)))` |
//! | [`equalize_histogram`] | `LUT[v]`, `LUT[i] = round(255 F(i))` |
//!
//! Tone and linear evaluate in `f64` and truncate after clamping. The
//! table-driven operators build a fresh [`Lut8`] per call.
//!
//! # Example
//!
//! ```rust
//! use ips_core::BgrImage;
//! use ips_ops::pixelwise;
//!
//! let src = BgrImage::filled(4, 4, [100, 150, 200]);
//! let out = pixelwise::linear(&src, 1.0, 50.0).unwrap();
//! assert_eq!(out.pixel(0, 0), [150, 200, 250]);
//! ```

use std::fmt;

use ips_core::{BgrImage, Channel, Histogram};
use ips_lut::Lut8;
use tracing::{debug, trace};

use crate::rows::{map_rows, map_samples};
use crate::{OpsError, OpsResult};

fn require_finite(name: &str, v: f64) -> OpsResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(OpsError::InvalidParameter(format!("{name} must be finite, got {v}")))
    }
}

/// Clamp to `[0, 255]` and truncate.
#[inline]
fn saturate(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Multiplies every sample by `coeff`.
///
/// `coeff = 1` is the identity.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `coeff` is not finite.
pub fn tone_scale(src: &BgrImage, coeff: f64) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), coeff, "tone_scale");
    require_finite("coeff", coeff)?;
    map_samples(src, |v| saturate(v as f64 * coeff))
}

/// Affine map `a * v + b` (gain then offset).
///
/// `a = 1, b = 0` is the identity.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `a` or `b` is not finite.
pub fn linear(src: &BgrImage, a: f64, b: f64) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), a, b, "linear");
    require_finite("a", a)?;
    require_finite("b", b)?;
    map_samples(src, |v| saturate(a * v as f64 + b))
}

/// Inverts every sample, `255 - v`.
pub fn negative(src: &BgrImage) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), "negative");
    map_samples(src, |v| 255 - v)
}

/// Power-law mapping through a 256-entry table.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] unless `gamma` is finite and `> 0`.
///
/// # Example
///
/// ```rust
/// use ips_core::BgrImage;
/// use ips_ops::pixelwise::gamma;
///
/// let src = BgrImage::filled(2, 2, [0, 128, 255]);
/// let out = gamma(&src, 0.7).unwrap();
/// assert_eq!(out.pixel(0, 0)[0], 0);
/// assert!(out.pixel(0, 0)[1] > 128);
/// assert_eq!(out.pixel(0, 0)[2], 255);
/// assert!(gamma(&src, 0.0).is_err());
/// ```
pub fn gamma(src: &BgrImage, gamma: f64) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), gamma, "gamma");
    apply_lut(src, &Lut8::gamma(gamma)?)
}

/// Logistic contrast curve through a 256-entry table.
///
/// `k` is the slope, `x0` the midpoint on the normalized `[0, 1]` axis.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `k` or `x0` is not finite.
pub fn sigmoid(src: &BgrImage, k: f64, x0: f64) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), k, x0, "sigmoid");
    apply_lut(src, &Lut8::sigmoid(k, x0)?)
}

/// Histogram equalization.
///
/// The histogram is taken over the blue channel as an intensity proxy
/// (not luma), and the resulting table is applied to all three channels.
/// On color input this shifts hue; it is exact only for gray images.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] for a zero-area image, whose histogram
/// cannot be normalized.
pub fn equalize_histogram(src: &BgrImage) -> OpsResult<BgrImage> {
    trace!(width = src.width(), height = src.height(), "equalize_histogram");
    if src.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "cannot equalize {}x{} image: no pixels to normalize by",
            src.width(),
            src.height()
        )));
    }
    let hist = Histogram::from_channel(src, Channel::Blue);
    debug!(total = hist.total(), peak = hist.max_count(), "equalization histogram");
    apply_lut(src, &Lut8::equalization(&hist)?)
}

/// Maps every sample through `lut`.
pub fn apply_lut(src: &BgrImage, lut: &Lut8) -> OpsResult<BgrImage> {
    map_rows(src, |y, row| {
        lut.apply_slice(src.row(y), row);
        Ok(())
    })
}

/// A pixel-wise operator and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelOp {
    /// [`tone_scale`]
    ToneScale {
        /// Multiplier
        coeff: f64,
    },
    /// [`linear`]
    Linear {
        /// Gain
        a: f64,
        /// Offset
        b: f64,
    },
    /// [`negative`]
    Negative,
    /// [`gamma`]
    Gamma {
        /// Exponent, `> 0`
        gamma: f64,
    },
    /// [`sigmoid`]
    Sigmoid {
        /// Slope
        k: f64,
        /// Midpoint in `[0, 1]`
        x0: f64,
    },
    /// [`equalize_histogram`]
    HistEqualization,
}

impl PixelOp {
    /// Runs the operator on `src`.
    pub fn apply(&self, src: &BgrImage) -> OpsResult<BgrImage> {
        match *self {
            Self::ToneScale { coeff } => tone_scale(src, coeff),
            Self::Linear { a, b } => linear(src, a, b),
            Self::Negative => negative(src),
            Self::Gamma { gamma: g } => gamma(src, g),
            Self::Sigmoid { k, x0 } => sigmoid(src, k, x0),
            Self::HistEqualization => equalize_histogram(src),
        }
    }

    /// Output-name token for this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToneScale { .. } => "ToneCurve",
            Self::Linear { .. } => "Linear",
            Self::Negative => "Nega",
            Self::Gamma { .. } => "Gamma",
            Self::Sigmoid { .. } => "Sigmoid",
            Self::HistEqualization => "HistEqualization",
        }
    }
}

impl fmt::Display for PixelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
