//! ips - pixel-wise mapping and spatial filtering for 8-bit images
//!
//! Runs one intensity mapper, one 3x3 filter, or the mapper-then-filter
//! pipeline on a BMP/PNG/JPEG/TIFF image, and optionally plots the
//! luminance histogram of the result.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod plot;

#[derive(Parser)]
#[command(name = "ips")]
#[command(author, version, about = "Pixel-wise mapping and 3x3 filtering for 8-bit images")]
#[command(long_about = "
Applies intensity mappings and small-kernel spatial filters to 8-bit images.

Examples:
  ips map gamma in.bmp -o out.bmp --gamma 0.7
  ips map linear in.bmp -o out.bmp --a 1.2 --b -20
  ips filter sobel in.png -o edges.png
  ips filter box in.png -o soft.png --radius 3
  ips run in.bmp --map sigmoid --filter median --out-dir output
  ips --hist hist.png map hist-eq in.bmp -o eq.bmp
  ips hist in.bmp -o hist.png

Mappers: tone, linear, negative, gamma, sigmoid, hist-eq
Filters: box, weighted, sharpen, edge, sobel, prewitt, roberts, emboss, median
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also render a luminance histogram plot of the result to this file
    #[arg(long, global = true)]
    hist: Option<PathBuf>,

    /// Count mapped to the top of the histogram plot
    #[arg(long, global = true, default_value = "17000")]
    hist_max: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one pixel-wise intensity mapper
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// Apply one spatial filter
    #[command(visible_alias = "f")]
    Filter(FilterArgs),

    /// Apply an optional mapper, then an optional filter
    Run(RunArgs),

    /// Plot the luminance histogram of an image
    Hist(HistArgs),
}

/// Mapper parameters, shared by `map` and `run`.
#[derive(Args, Clone, Copy)]
struct MapParams {
    /// Tone-scale coefficient
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    coeff: f64,

    /// Linear gain
    #[arg(long = "a", default_value_t = 1.0, allow_negative_numbers = true)]
    a: f64,

    /// Linear offset
    #[arg(long = "b", default_value_t = 50.0, allow_negative_numbers = true)]
    b: f64,

    /// Gamma exponent (> 0)
    #[arg(long, default_value_t = 0.7, allow_negative_numbers = true)]
    gamma: f64,

    /// Sigmoid slope
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    k: f64,

    /// Sigmoid midpoint in [0, 1]
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    x0: f64,
}

/// Filter parameters, shared by `filter` and `run`.
#[derive(Args, Clone, Copy)]
struct FilterParams {
    /// Box smoothing radius (window is 2r+1 square)
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    radius: i32,
}

#[derive(Args)]
struct MapArgs {
    /// Mapper: tone, linear, negative, gamma, sigmoid, hist-eq
    op: String,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    params: MapParams,
}

#[derive(Args)]
struct FilterArgs {
    /// Filter: box, weighted, sharpen, edge, sobel, prewitt, roberts, emboss, median
    op: String,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    params: FilterParams,
}

#[derive(Args)]
struct RunArgs {
    /// Input image
    input: PathBuf,

    /// Output image (default: <out-dir>/outimg_<Stage>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the derived output name
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Extension for the derived output name
    #[arg(long, default_value = "bmp")]
    ext: String,

    /// Mapper stage
    #[arg(long)]
    map: Option<String>,

    /// Filter stage
    #[arg(long)]
    filter: Option<String>,

    #[command(flatten)]
    map_params: MapParams,

    #[command(flatten)]
    filter_params: FilterParams,
}

#[derive(Args)]
struct HistArgs {
    /// Input image
    input: PathBuf,

    /// Output plot image
    #[arg(short, long)]
    output: PathBuf,
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let hist = commands::HistPlot {
        path: cli.hist.clone(),
        max: cli.hist_max,
    };

    match cli.command {
        Commands::Map(args) => commands::map::run(args, cli.verbose, &hist),
        Commands::Filter(args) => commands::filter::run(args, cli.verbose, &hist),
        Commands::Run(args) => commands::run::run(args, cli.verbose, &hist),
        Commands::Hist(args) => commands::hist::run(args, cli.verbose, cli.hist_max),
    }
}
