//! 256-bin intensity histograms.
//!
//! A [`Histogram`] counts 8-bit levels over one reduced channel of a
//! [`BgrImage`]. Two reductions exist:
//!
//! - [`Histogram::from_channel`] takes a single stored channel. Histogram
//!   equalization uses this with [`Channel::Blue`] as its intensity proxy.
//! - [`Histogram::from_luma`] uses BT.601 luma, for display plots.
//!
//! # Example
//!
//! ```rust
//! use ips_core::{BgrImage, Channel, Histogram};
//!
//! let img = BgrImage::filled(4, 4, [10, 20, 30]);
//! let hist = Histogram::from_channel(&img, Channel::Blue);
//! assert_eq!(hist.count(10), 16);
//! assert_eq!(hist.total(), 16);
//! ```

use crate::image::{BgrImage, CHANNELS};
use crate::pixel::{luma_bt601, Bgr, Channel};
use crate::{Error, Result};

/// Number of bins, one per 8-bit level.
pub const BINS: usize = 256;

/// Frequency counts over 256 intensity levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BINS],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [0; BINS],
            total: 0,
        }
    }
}

impl Histogram {
    /// Builds a histogram by reducing every pixel with `reduce`.
    pub fn from_fn<F>(image: &BgrImage, reduce: F) -> Self
    where
        F: Fn(Bgr) -> u8,
    {
        let mut hist = Self::default();
        for px in image.data().chunks_exact(CHANNELS) {
            let level = reduce([px[0], px[1], px[2]]);
            hist.bins[level as usize] += 1;
        }
        hist.total = image.pixel_count() as u64;
        hist
    }

    /// Counts the levels of one stored channel.
    pub fn from_channel(image: &BgrImage, channel: Channel) -> Self {
        Self::from_fn(image, |px| channel.of(px))
    }

    /// Counts BT.601 luma levels.
    pub fn from_luma(image: &BgrImage) -> Self {
        Self::from_fn(image, luma_bt601)
    }

    /// Count for one level.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.bins[level as usize]
    }

    /// All bin counts.
    #[inline]
    pub fn bins(&self) -> &[u64; BINS] {
        &self.bins
    }

    /// Number of samples counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest bin count (0 for an empty histogram).
    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Relative frequencies `count[i] / total`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when nothing was counted, since
    /// the normalization would divide by zero.
    pub fn normalized(&self) -> Result<[f64; BINS]> {
        if self.total == 0 {
            return Err(Error::invalid_dimensions(
                0,
                0,
                "histogram of a zero-area image cannot be normalized",
            ));
        }
        let total = self.total as f64;
        let mut out = [0.0; BINS];
        for (o, &c) in out.iter_mut().zip(self.bins.iter()) {
            *o = c as f64 / total;
        }
        Ok(out)
    }

    /// Cumulative distribution `F(i) = sum of normalized[j] for j <= i`.
    ///
    /// # Errors
    ///
    /// Same as [`Histogram::normalized`].
    pub fn cumulative(&self) -> Result<[f64; BINS]> {
        let mut cdf = self.normalized()?;
        let mut acc = 0.0;
        for v in cdf.iter_mut() {
            acc += *v;
            *v = acc;
        }
        Ok(cdf)
    }
}
