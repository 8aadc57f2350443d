//! CLI command implementations

pub mod filter;
pub mod hist;
pub mod map;
pub mod run;

use anyhow::{bail, Context, Result};
use ips_core::{BgrImage, Histogram};
use ips_ops::{FilterOp, PixelOp};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{FilterParams, MapParams};

/// Where and how to plot the histogram of a command's result.
pub struct HistPlot {
    /// Plot destination, if requested
    pub path: Option<PathBuf>,
    /// Count at the top of the y axis
    pub max: f64,
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<BgrImage> {
    ips_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &BgrImage) -> Result<()> {
    ips_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Saves the result and, if requested, its histogram plot.
pub fn finish(output: &Path, image: &BgrImage, hist: &HistPlot, verbose: u8) -> Result<()> {
    save_image(output, image)?;
    info!(output = %output.display(), "saved");
    if verbose > 0 {
        println!("Wrote {}", output.display());
    }
    if let Some(path) = &hist.path {
        save_hist_plot(path, image, hist.max)?;
        if verbose > 0 {
            println!("Wrote histogram {}", path.display());
        }
    }
    Ok(())
}

/// Renders the luminance histogram of `image` to `path`.
pub fn save_hist_plot(path: &Path, image: &BgrImage, max: f64) -> Result<()> {
    let plot = crate::plot::render(&Histogram::from_luma(image), max)?;
    save_image(path, &plot)
}

/// Resolves a mapper name to an operator.
pub fn parse_mapper(name: &str, p: &MapParams) -> Result<PixelOp> {
    Ok(match name.to_lowercase().as_str() {
        "tone" | "tone-curve" | "tonecurve" => PixelOp::ToneScale { coeff: p.coeff },
        "linear" => PixelOp::Linear { a: p.a, b: p.b },
        "negative" | "nega" | "invert" => PixelOp::Negative,
        "gamma" => PixelOp::Gamma { gamma: p.gamma },
        "sigmoid" => PixelOp::Sigmoid { k: p.k, x0: p.x0 },
        "hist-eq" | "histeq" | "equalize" => PixelOp::HistEqualization,
        other => bail!(
            "Unknown mapper '{}' (expected tone, linear, negative, gamma, sigmoid, hist-eq)",
            other
        ),
    })
}

/// Resolves a filter name to an operator.
pub fn parse_filter(name: &str, p: &FilterParams) -> Result<FilterOp> {
    Ok(match name.to_lowercase().as_str() {
        "box" | "equalization" => FilterOp::BoxSmooth { radius: p.radius },
        "weighted" | "weighted-average" => FilterOp::WeightedAverage,
        "sharpen" | "sharpening" => FilterOp::Sharpen,
        "edge" | "edge-detect" => FilterOp::EdgeDetect,
        "sobel" => FilterOp::Sobel,
        "prewitt" => FilterOp::Prewitt,
        "roberts" => FilterOp::Roberts,
        "emboss" | "embossing" => FilterOp::Emboss,
        "median" => FilterOp::Median,
        other => bail!(
            "Unknown filter '{}' (expected box, weighted, sharpen, edge, sobel, prewitt, roberts, emboss, median)",
            other
        ),
    })
}
