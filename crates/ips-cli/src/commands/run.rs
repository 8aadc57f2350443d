//! Run command
//!
//! Optional mapper, then optional filter on its output. Without `-o` the
//! result is written to `<out-dir>/outimg_<Stage>.<ext>`, where `<Stage>`
//! names the last stage that ran (`None` if neither did).

use crate::RunArgs;
use anyhow::{Context, Result};
use ips_ops::Pipeline;
use std::path::{Path, PathBuf};
use tracing::{info, trace};

use super::HistPlot;

/// Output name derived from the pipeline label.
pub fn derived_output(dir: &Path, pipeline: &Pipeline, ext: &str) -> PathBuf {
    dir.join(format!("outimg_{}.{}", pipeline.label(), ext.trim_start_matches('.')))
}

pub fn run(args: RunArgs, verbose: u8, hist: &HistPlot) -> Result<()> {
    trace!(input = %args.input.display(), map = ?args.map, filter = ?args.filter, "run::run");

    let mut pipeline = Pipeline::new();
    if let Some(name) = &args.map {
        pipeline = pipeline.with_mapper(super::parse_mapper(name, &args.map_params)?);
    }
    if let Some(name) = &args.filter {
        pipeline = pipeline.with_filter(super::parse_filter(name, &args.filter_params)?);
    }

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            std::fs::create_dir_all(&args.out_dir).with_context(|| {
                format!("Failed to create output directory: {}", args.out_dir.display())
            })?;
            derived_output(&args.out_dir, &pipeline, &args.ext)
        }
    };

    let image = super::load_image(&args.input)?;
    let (w, h) = image.dimensions();
    info!(label = pipeline.label(), w, h, "Running pipeline");
    if verbose > 0 {
        println!("Running {} on {} ({}x{})", pipeline.label(), args.input.display(), w, h);
    }

    let output = pipeline.run(&image)?;
    super::finish(&output_path, &output, hist, verbose)
}
