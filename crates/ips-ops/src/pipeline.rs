//! One mapper, then one filter.
//!
//! A [`Pipeline`] holds at most one [`PixelOp`] and at most one
//! [`FilterOp`]. Running it applies the mapper first and feeds its output
//! to the filter. With neither stage set the input is returned as a copy.

use ips_core::BgrImage;
use tracing::debug;

use crate::filter::FilterOp;
use crate::pixelwise::PixelOp;
use crate::OpsResult;

/// Label used when no stage runs.
pub const NO_OP_LABEL: &str = "None";

/// Optional pixel-wise stage followed by an optional spatial stage.
///
/// # Example
///
/// ```rust
/// use ips_core::BgrImage;
/// use ips_ops::{FilterOp, Pipeline, PixelOp};
///
/// let p = Pipeline::new()
///     .with_mapper(PixelOp::Negative)
///     .with_filter(FilterOp::Median);
/// assert_eq!(p.label(), "MedianFilter");
///
/// let out = p.run(&BgrImage::filled(4, 4, [0, 0, 0])).unwrap();
/// assert_eq!(out.pixel(2, 2), [255, 255, 255]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pipeline {
    /// Pixel-wise stage, applied first.
    pub mapper: Option<PixelOp>,
    /// Spatial stage, applied to the mapper's output.
    pub filter: Option<FilterOp>,
}

impl Pipeline {
    /// Empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pixel-wise stage.
    pub fn with_mapper(mut self, op: PixelOp) -> Self {
        self.mapper = Some(op);
        self
    }

    /// Sets the spatial stage.
    pub fn with_filter(mut self, op: FilterOp) -> Self {
        self.filter = Some(op);
        self
    }

    /// `true` if no stage is set.
    pub fn is_empty(&self) -> bool {
        self.mapper.is_none() && self.filter.is_none()
    }

    /// Runs the configured stages on `src`.
    pub fn run(&self, src: &BgrImage) -> OpsResult<BgrImage> {
        let mapped = match &self.mapper {
            Some(op) => {
                debug!(stage = op.name(), "pipeline mapper");
                Some(op.apply(src)?)
            }
            None => None,
        };
        let input = mapped.as_ref().unwrap_or(src);
        match &self.filter {
            Some(op) => {
                debug!(stage = op.name(), "pipeline filter");
                op.apply(input)
            }
            None => Ok(mapped.unwrap_or_else(|| src.clone())),
        }
    }

    /// Name of the last stage that runs, or `"None"`.
    pub fn label(&self) -> &'static str {
        match (&self.mapper, &self.filter) {
            (_, Some(f)) => f.name(),
            (Some(m), None) => m.name(),
            (None, None) => NO_OP_LABEL,
        }
    }
}
