//! Image buffer type for 8-bit BGR processing.
//!
//! [`BgrImage`] is the single buffer type every operator consumes and
//! produces. Operators never mutate their input; they allocate a fresh
//! output of identical dimensions.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with channels
//! interleaved in BGR order:
//!
//! ```text
//! Memory: [B G R B G R B G R ...]  <- Row 0
//!         [B G R B G R B G R ...]  <- Row 1
//!         ...
//! ```
//!
//! BGR is the order of the external decode/encode boundary. Use
//! [`BgrImage::from_rgb`] and [`BgrImage::to_rgb`] when talking to RGB
//! libraries.
//!
//! # Usage
//!
//! ```rust
//! use ips_core::BgrImage;
//!
//! let mut img = BgrImage::new(4, 3);
//! img.set_pixel(1, 2, [10, 20, 30]);
//! assert_eq!(img.pixel(1, 2), [10, 20, 30]);
//!
//! // Border replication: (-5, 99) reads the bottom-left corner
//! assert_eq!(img.sample_clamped(-5, 99), img.pixel(0, 2));
//! ```

use crate::border::clamp_coord;
use crate::pixel::Bgr;
use crate::{Error, Result};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Owned 3-channel 8-bit image in BGR order.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BgrImage {
    /// Pixel data, `width * height * 3` bytes
    data: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl BgrImage {
    /// Creates a new black image.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ips_core::BgrImage;
    ///
    /// let img = BgrImage::new(640, 480);
    /// assert_eq!(img.dimensions(), (640, 480));
    /// assert_eq!(img.data().len(), 640 * 480 * 3);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * CHANNELS],
            width,
            height,
        }
    }

    /// Creates an image from existing BGR data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Creates an image from RGB-ordered data, swapping to BGR storage.
    pub fn from_rgb(width: u32, height: u32, mut rgb: Vec<u8>) -> Result<Self> {
        for px in rgb.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        Self::from_data(width, height, rgb)
    }

    /// Creates an image filled with one pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ips_core::BgrImage;
    ///
    /// let gray = BgrImage::filled(8, 8, [128, 128, 128]);
    /// assert!(gray.pixels().all(|(_, _, px)| px == [128, 128, 128]));
    /// ```
    pub fn filled(width: u32, height: u32, pixel: Bgr) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self { data, width, height }
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Bgr,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { data, width, height }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns the raw BGR bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw BGR bytes mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning its BGR bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copies the pixels out in RGB order.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = self.data.clone();
        for px in rgb.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        rgb
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Bgr {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Bgr> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at signed (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the coordinate lies outside the
    /// image. Neighborhood code reads through this after clamping, so an
    /// addressing bug surfaces as an error instead of a wrong sample.
    #[inline]
    pub fn try_pixel(&self, x: i64, y: i64) -> Result<Bgr> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixel(x as u32, y as u32))
    }

    /// Returns the pixel at signed (x, y) with border replication.
    ///
    /// # Panics
    ///
    /// Panics on a zero-area image.
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64) -> Bgr {
        self.pixel(clamp_coord(x, self.width), clamp_coord(y, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Bgr) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&pixel);
    }

    /// Returns row `y` as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.row_stride();
        &self.data[start..start + self.row_stride()]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Bgr)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Checks that `other` has the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn same_dimensions(&self, other: &BgrImage) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BgrImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BgrImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
