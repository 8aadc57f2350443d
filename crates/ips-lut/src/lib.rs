//! # ips-lut
//!
//! 256-entry 8-bit lookup tables for pixel-wise intensity mapping.
//!
//! Gamma, sigmoid and histogram-equalization mappings all reduce to one
//! table indexed by the input sample. This crate builds those tables:
//!
//! - [`Lut8::identity`] / [`Lut8::negative`]
//! - [`Lut8::gamma`] - `(i/255)^gamma * 255`
//! - [`Lut8::sigmoid`] - `255 / (1 + exp(-k * (i/255 - x0)))`
//! - [`Lut8::equalization`] - `round(255 * F(i))` from a [`Histogram`](ips_core::Histogram)
//!
//! # Usage
//!
//! ```rust
//! use ips_lut::Lut8;
//!
//! let lut = Lut8::sigmoid(10.0, 0.5)?;
//! let out = lut.apply_pixel([0, 128, 255]);
//! assert!(out[0] < out[1] && out[1] < out[2]);
//! # Ok::<(), ips_lut::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`ips-core`] - Histogram and pixel types
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Debug events when a table is built

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut8;

pub use error::{LutError, LutResult};
pub use lut8::{quantize, Lut8, LEVELS};
