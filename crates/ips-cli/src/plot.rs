//! Histogram plot rendering.
//!
//! Draws a 256-bin histogram as black vertical bars on a white
//! 1024x512 canvas with a 50 px margin, axes, and tick marks:
//!
//! ```text
//!   |                      <- hist_max
//!   |   |
//!   |   ||   |
//!   |  |||| ||  |
//!   +--------------------
//!   0   64  128  192  256
//! ```
//!
//! Bar heights are scaled against a fixed `hist_max` rather than the
//! tallest bin, so plots of different images share a y axis. Bins above
//! `hist_max` are cut at the top of the plot. Tick labels are not drawn.

use anyhow::{ensure, Result};
use ips_core::{Bgr, BgrImage, Histogram};

/// Canvas width.
pub const WIDTH: u32 = 1024;
/// Canvas height.
pub const HEIGHT: u32 = 512;
/// Gap between canvas edge and axes.
pub const MARGIN: u32 = 50;

const Y_TICKS: u32 = 5;
const X_TICKS: u32 = 4;
const TICK_LEN: u32 = 5;

const WHITE: Bgr = [255, 255, 255];
const BLACK: Bgr = [0, 0, 0];

fn vline(img: &mut BgrImage, x: u32, y0: u32, y1: u32) {
    for y in y0.min(y1)..=y0.max(y1) {
        img.set_pixel(x, y, BLACK);
    }
}

fn hline(img: &mut BgrImage, y: u32, x0: u32, x1: u32) {
    for x in x0.min(x1)..=x0.max(x1) {
        img.set_pixel(x, y, BLACK);
    }
}

/// Plot area height in pixels.
const fn plot_height() -> u32 {
    HEIGHT - 2 * MARGIN
}

/// Bar height for a bin count.
pub fn bar_height(count: u64, hist_max: f64) -> u32 {
    let h = (plot_height() as f64 * count as f64 / hist_max) as u32;
    h.min(plot_height())
}

/// Renders `hist` to a new canvas.
///
/// # Errors
///
/// Fails if `hist_max` is not a positive finite number.
pub fn render(hist: &Histogram, hist_max: f64) -> Result<BgrImage> {
    ensure!(
        hist_max.is_finite() && hist_max > 0.0,
        "histogram max must be > 0, got {}",
        hist_max
    );

    let mut img = BgrImage::filled(WIDTH, HEIGHT, WHITE);
    let base = HEIGHT - MARGIN;
    let span = WIDTH - 2 * MARGIN;

    // Y ticks, 0..=5 fifths of hist_max
    for i in 0..=Y_TICKS {
        let y = base - i * plot_height() / Y_TICKS;
        hline(&mut img, y, MARGIN - TICK_LEN, MARGIN);
    }

    // X ticks at 0, 64, 128, 192, 256
    for i in 0..=X_TICKS {
        let x = MARGIN + i * span / X_TICKS;
        vline(&mut img, x, base, base + TICK_LEN);
    }

    for (i, &count) in hist.bins().iter().enumerate() {
        let h = bar_height(count, hist_max);
        let x = MARGIN + i as u32 * span / 256;
        vline(&mut img, x, base, base - h);
    }

    // Axes
    vline(&mut img, MARGIN, MARGIN, base);
    hline(&mut img, base, MARGIN, WIDTH - MARGIN);

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scaling() {
        assert_eq!(bar_height(0, 17000.0), 0);
        assert_eq!(bar_height(17000, 17000.0), 412);
        assert_eq!(bar_height(8500, 17000.0), 206);
        assert_eq!(bar_height(1_000_000, 17000.0), 412);
    }

    #[test]
    fn test_canvas_and_axes() {
        let plot = render(&Histogram::from_luma(&BgrImage::new(0, 0)), 100.0).unwrap();
        assert_eq!(plot.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(plot.pixel(0, 0), WHITE);
        // Y axis and X axis
        assert_eq!(plot.pixel(MARGIN, 200), BLACK);
        assert_eq!(plot.pixel(700, HEIGHT - MARGIN), BLACK);
        // Y tick at the top, x tick below the axis at 256
        assert_eq!(plot.pixel(MARGIN - 3, MARGIN), BLACK);
        assert_eq!(plot.pixel(WIDTH - MARGIN, HEIGHT - MARGIN + 3), BLACK);
        // Inside the plot nothing is drawn for an empty histogram
        assert_eq!(plot.pixel(300, 200), WHITE);
    }

    #[test]
    fn test_bars() {
        // 100 pixels of gray 128 -> one full-height bar at bin 128
        let img = BgrImage::filled(10, 10, [128, 128, 128]);
        let plot = render(&Histogram::from_luma(&img), 100.0).unwrap();
        let x = MARGIN + 128 * (WIDTH - 2 * MARGIN) / 256;
        assert_eq!(plot.pixel(x, MARGIN), BLACK);
        assert_eq!(plot.pixel(x, MARGIN - 1), WHITE);
        assert_eq!(plot.pixel(x + 1, HEIGHT / 2), WHITE);
    }

    #[test]
    fn test_rejects_bad_max() {
        let h = Histogram::from_luma(&BgrImage::new(1, 1));
        assert!(render(&h, 0.0).is_err());
        assert!(render(&h, f64::NAN).is_err());
    }
}
