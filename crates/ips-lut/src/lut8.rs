//! 256-entry 8-bit lookup table.
//!
//! A [`Lut8`] maps every possible 8-bit channel sample to an output sample.
//! Curve builders evaluate the curve once per level, clamp to `[0, 255]`
//! and round to the nearest level, so applying the table is a single
//! indexed load per channel.
//!
//! Tables are built per call and owned by that call. Nothing is cached.

use ips_core::{Bgr, Histogram};
use tracing::debug;

use crate::{LutError, LutResult};

/// Number of entries in an 8-bit table.
pub const LEVELS: usize = 256;

/// A 256-entry 8-bit lookup table shared by all three channels.
///
/// # Example
///
/// ```rust
/// use ips_lut::Lut8;
///
/// let lut = Lut8::gamma(0.5).unwrap();
/// assert_eq!(lut.apply(0), 0);
/// assert_eq!(lut.apply(255), 255);
/// assert!(lut.apply(64) > 64);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Lut8 {
    table: [u8; LEVELS],
}

/// Clamp a curve value to the 8-bit range and round half up.
#[inline]
pub fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 255.0) + 0.5).floor() as u8
}

impl Lut8 {
    /// Pass-through table.
    pub fn identity() -> Self {
        Self::from_fn(|i| i as f64)
    }

    /// Wraps a precomputed table.
    pub const fn from_array(table: [u8; LEVELS]) -> Self {
        Self { table }
    }

    /// Evaluates `f` at every level, quantizing each result with [`quantize`].
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(u8) -> f64,
    {
        let mut table = [0u8; LEVELS];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = quantize(f(i as u8));
        }
        Self { table }
    }

    /// Inversion table, `255 - v`.
    pub fn negative() -> Self {
        let mut table = [0u8; LEVELS];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = 255 - i as u8;
        }
        Self { table }
    }

    /// Power-law table, `LUT[i] = (i/255)^gamma * 255`.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidParameter`] unless `gamma` is finite and `> 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ips_lut::Lut8;
    ///
    /// assert!(Lut8::gamma(1.0).unwrap().is_identity());
    /// assert!(Lut8::gamma(0.0).is_err());
    /// ```
    pub fn gamma(gamma: f64) -> LutResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(LutError::InvalidParameter(format!(
                "gamma must be finite and > 0, got {gamma}"
            )));
        }
        let lut = Self::from_fn(|i| (i as f64 / 255.0).powf(gamma) * 255.0);
        debug!(gamma, mid = lut.apply(128), "built gamma LUT");
        Ok(lut)
    }

    /// Logistic table, `LUT[i] = 255 / (1 + exp(-k * (i/255 - x0)))`.
    ///
    /// `k` is the slope and `x0` the midpoint on the normalized `[0, 1]`
    /// axis. A negative `k` produces a falling curve.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidParameter`] if `k` or `x0` is not finite.
    pub fn sigmoid(k: f64, x0: f64) -> LutResult<Self> {
        if !k.is_finite() {
            return Err(LutError::InvalidParameter(format!("sigmoid slope must be finite, got {k}")));
        }
        if !x0.is_finite() {
            return Err(LutError::InvalidParameter(format!(
                "sigmoid midpoint must be finite, got {x0}"
            )));
        }
        let lut = Self::from_fn(|i| 255.0 / (1.0 + (-k * (i as f64 / 255.0 - x0)).exp()));
        debug!(k, x0, lo = lut.apply(0), hi = lut.apply(255), "built sigmoid LUT");
        Ok(lut)
    }

    /// Equalization table from a histogram, `LUT[i] = round(255 * F(i))`
    /// where `F` is the cumulative distribution.
    ///
    /// # Errors
    ///
    /// [`LutError::EmptyHistogram`] if the histogram counted no samples.
    pub fn equalization(hist: &Histogram) -> LutResult<Self> {
        let cdf = hist.cumulative().map_err(|_| LutError::EmptyHistogram)?;
        let lut = Self::from_fn(|i| 255.0 * cdf[i as usize]);
        debug!(total = hist.total(), "built equalization LUT");
        Ok(lut)
    }

    /// Maps one sample.
    #[inline]
    pub fn apply(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    /// Maps all three channels of a pixel.
    #[inline]
    pub fn apply_pixel(&self, px: Bgr) -> Bgr {
        [self.apply(px[0]), self.apply(px[1]), self.apply(px[2])]
    }

    /// Maps `src` into `dst` sample by sample.
    ///
    /// Only the common prefix of the two slices is written.
    #[inline]
    pub fn apply_slice(&self, src: &[u8], dst: &mut [u8]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.table[s as usize];
        }
    }

    /// The raw table.
    #[inline]
    pub fn as_array(&self) -> &[u8; LEVELS] {
        &self.table
    }

    /// `true` if every level maps to itself.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| i == v as usize)
    }
}

impl Default for Lut8 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<u8> for Lut8 {
    type Output = u8;

    #[inline]
    fn index(&self, v: u8) -> &u8 {
        &self.table[v as usize]
    }
}

impl std::fmt::Debug for Lut8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lut8")
            .field("first", &self.table[0])
            .field("mid", &self.table[128])
            .field("last", &self.table[255])
            .finish()
    }
}
