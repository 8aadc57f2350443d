//! Hist command
//!
//! Plots the luminance histogram of an image without transforming it.

use crate::HistArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: HistArgs, verbose: u8, max: f64) -> Result<()> {
    trace!(input = %args.input.display(), max, "hist::run");

    let image = super::load_image(&args.input)?;
    super::save_hist_plot(&args.output, &image, max)?;

    if verbose > 0 {
        println!("Wrote histogram {}", args.output.display());
    }
    Ok(())
}
