//! Filter command
//!
//! Applies one 3x3 (or box) spatial filter.

use crate::FilterArgs;
use anyhow::Result;
use tracing::{info, trace};

use super::HistPlot;

pub fn run(args: FilterArgs, verbose: u8, hist: &HistPlot) -> Result<()> {
    trace!(input = %args.input.display(), op = %args.op, radius = args.params.radius, "filter::run");

    let op = super::parse_filter(&args.op, &args.params)?;
    let image = super::load_image(&args.input)?;
    let (w, h) = image.dimensions();

    info!(op = op.name(), w, h, "Applying filter");
    if verbose > 0 {
        println!("Applying {} to {} ({}x{})", op, args.input.display(), w, h);
    }

    let output = op.apply(&image)?;
    super::finish(&args.output, &output, hist, verbose)
}
