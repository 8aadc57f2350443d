//! Border replication ("clamp-to-edge") addressing.
//!
//! Every neighborhood operator reads out-of-image neighbors through
//! [`clamp_coord`], so edge and corner pixels are replicated outward:
//!
//! ```text
//! coord:  -2 -1 | 0 1 2 3 | 4 5
//! reads:   0  0 | 0 1 2 3 | 3 3
//! ```
//!
//! Nothing wraps and nothing is zero-padded.

/// Clamps a signed coordinate into `[0, len - 1]`.
///
/// `len` must be non-zero; zero-area images never reach neighborhood
/// addressing because their pixel loops are empty.
///
/// # Example
///
/// ```rust
/// use ips_core::clamp_coord;
///
/// assert_eq!(clamp_coord(-1, 4), 0);
/// assert_eq!(clamp_coord(2, 4), 2);
/// assert_eq!(clamp_coord(9, 4), 3);
/// ```
#[inline]
pub fn clamp_coord(coord: i64, len: u32) -> u32 {
    debug_assert!(len > 0, "clamp_coord on empty axis");
    coord.clamp(0, len as i64 - 1) as u32
}

/// Clamped coordinates for every tap of a `2 * radius + 1` window centered
/// at `center`.
///
/// Handy for filters that walk the same row/column window many times.
pub fn clamped_window(center: u32, radius: u32, len: u32) -> impl Iterator<Item = u32> {
    let r = radius as i64;
    let c = center as i64;
    (-r..=r).map(move |d| clamp_coord(c + d, len))
}
