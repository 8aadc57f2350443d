//! Fixed 3x3 integer kernels.
//!
//! A [`Kernel3`] is a weight matrix indexed `weights[row][col]`, where row
//! 0 is the neighbor above the center pixel (`dy = -1`) and column 0 the
//! neighbor to its left (`dx = -1`). Evaluating a kernel sums
//! `weights * sample` in `i32`, divides by `divisor` truncating toward
//! zero, adds `bias`, and saturates to `[0, 255]`.
//!
//! # Named kernels
//!
//! | Constant | Use |
//! |---|---|
//! | [`Kernel3::WEIGHTED_AVERAGE`] | center-weighted smoothing, divisor 16 |
//! | [`Kernel3::SHARPEN`] | 4-neighbor Laplacian sharpening |
//! | [`Kernel3::EMBOSS`] | horizontal relief, `sum / 6 + 128` |
//! | [`Kernel3::EDGE_X`] / [`Kernel3::EDGE_Y`] | single-tap differences |
//! | [`Kernel3::SOBEL_X`] / [`Kernel3::SOBEL_Y`] | smoothed gradient pair |
//! | [`Kernel3::PREWITT_X`] / [`Kernel3::PREWITT_Y`] | unweighted gradient pair |
//! | [`Kernel3::ROBERTS_X`] / [`Kernel3::ROBERTS_Y`] | diagonal cross pair |
//!
//! Gradient kernels are used in pairs through
//! [`gradient_magnitude`](crate::filter::gradient_magnitude) and ignore
//! `divisor`/`bias`.

use ips_core::Bgr;

/// A 3x3 neighborhood of BGR samples, `window[row][col]`.
pub type Window3 = [[Bgr; 3]; 3];

/// 3x3 integer convolution kernel with normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3 {
    /// Weights, `weights[dy + 1][dx + 1]`.
    pub weights: [[i32; 3]; 3],
    /// Divisor applied to the weighted sum (truncating).
    pub divisor: i32,
    /// Offset added after division.
    pub bias: i32,
}

impl Kernel3 {
    /// `[[1,2,1],[2,8,2],[1,2,1]] / 16`.
    pub const WEIGHTED_AVERAGE: Self = Self::new([[1, 2, 1], [2, 8, 2], [1, 2, 1]], 16, 0);

    /// `[[0,-1,0],[-1,5,-1],[0,-1,0]]`, sum 1.
    pub const SHARPEN: Self = Self::new([[0, -1, 0], [-1, 5, -1], [0, -1, 0]], 1, 0);

    /// `[[0,0,0],[-3,0,3],[0,0,0]] / 6 + 128`.
    pub const EMBOSS: Self = Self::new([[0, 0, 0], [-3, 0, 3], [0, 0, 0]], 6, 128);

    /// Basic horizontal difference.
    pub const EDGE_X: Self = Self::gradient([[0, 0, 0], [1, 0, -1], [0, 0, 0]]);
    /// Basic vertical difference.
    pub const EDGE_Y: Self = Self::gradient([[0, 1, 0], [0, 0, 0], [0, -1, 0]]);

    /// Sobel, first of pair.
    pub const SOBEL_X: Self = Self::gradient([[1, 2, 1], [0, 0, 0], [-1, -2, -1]]);
    /// Sobel, second of pair.
    pub const SOBEL_Y: Self = Self::gradient([[1, 0, -1], [2, 0, -2], [1, 0, -1]]);

    /// Prewitt, first of pair.
    pub const PREWITT_X: Self = Self::gradient([[1, 1, 1], [0, 0, 0], [-1, -1, -1]]);
    /// Prewitt, second of pair.
    pub const PREWITT_Y: Self = Self::gradient([[1, 0, -1], [1, 0, -1], [1, 0, -1]]);

    /// Roberts cross, main diagonal.
    pub const ROBERTS_X: Self = Self::gradient([[0, 0, 0], [0, 1, 0], [0, 0, -1]]);
    /// Roberts cross, anti-diagonal.
    pub const ROBERTS_Y: Self = Self::gradient([[0, 0, 0], [0, 0, 1], [0, -1, 0]]);

    /// Creates a kernel.
    ///
    /// A zero `divisor` is treated as 1 when evaluating.
    pub const fn new(weights: [[i32; 3]; 3], divisor: i32, bias: i32) -> Self {
        Self { weights, divisor, bias }
    }

    /// Creates an unnormalized kernel (divisor 1, bias 0).
    pub const fn gradient(weights: [[i32; 3]; 3]) -> Self {
        Self::new(weights, 1, 0)
    }

    /// Creates a kernel normalized by the sum of its weights.
    ///
    /// Falls back to divisor 1 when the weights sum to zero.
    pub fn normalized(weights: [[i32; 3]; 3]) -> Self {
        let sum = weights.iter().flatten().sum();
        Self::new(weights, if sum == 0 { 1 } else { sum }, 0)
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }

    /// Weighted sum of one channel over a window, before normalization.
    #[inline]
    pub fn response(&self, window: &Window3, channel: usize) -> i32 {
        let mut sum = 0i32;
        for (krow, wrow) in self.weights.iter().zip(window) {
            for (&k, px) in krow.iter().zip(wrow) {
                sum += k * px[channel] as i32;
            }
        }
        sum
    }

    /// Normalized, biased and saturated output for one channel.
    #[inline]
    pub fn evaluate(&self, window: &Window3, channel: usize) -> u8 {
        let divisor = if self.divisor == 0 { 1 } else { self.divisor };
        (self.response(window, channel) / divisor + self.bias).clamp(0, 255) as u8
    }

    /// [`Kernel3::evaluate`] for all three channels.
    #[inline]
    pub fn evaluate_pixel(&self, window: &Window3) -> Bgr {
        [
            self.evaluate(window, 0),
            self.evaluate(window, 1),
            self.evaluate(window, 2),
        ]
    }
}
