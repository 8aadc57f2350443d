//! Map command
//!
//! Applies one pixel-wise intensity mapper.

use crate::MapArgs;
use anyhow::Result;
use tracing::{info, trace};

use super::HistPlot;

pub fn run(args: MapArgs, verbose: u8, hist: &HistPlot) -> Result<()> {
    trace!(input = %args.input.display(), op = %args.op, "map::run");

    let op = super::parse_mapper(&args.op, &args.params)?;
    let image = super::load_image(&args.input)?;
    let (w, h) = image.dimensions();

    info!(op = op.name(), w, h, "Applying mapper");
    if verbose > 0 {
        println!("Applying {} to {} ({}x{})", op, args.input.display(), w, h);
    }

    let output = op.apply(&image)?;
    super::finish(&args.output, &output, hist, verbose)
}
