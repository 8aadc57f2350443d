//! Channel addressing and grayscale reduction for 3-channel 8-bit pixels.
//!
//! Pixels are `[u8; 3]` triples in **BGR** storage order:
//!
//! ```text
//! index:   0     1      2
//! channel: Blue  Green  Red
//! ```
//!
//! Use [`Channel`] instead of bare indices so the order is spelled out at
//! every call site.

/// Fractional bits of the fixed-point luma weights.
pub const BT601_SHIFT: u32 = 14;

/// ITU-R BT.601 red weight, `0.299` in Q14.
pub const BT601_LUMA_R: u32 = 4899;

/// ITU-R BT.601 green weight, `0.587` in Q14.
pub const BT601_LUMA_G: u32 = 9617;

/// ITU-R BT.601 blue weight, `0.114` in Q14.
pub const BT601_LUMA_B: u32 = 1868;

/// A 3-channel 8-bit pixel in BGR order.
pub type Bgr = [u8; 3];

/// One of the three color channels of a [`Bgr`] pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Blue, stored first.
    Blue = 0,
    /// Green, stored second.
    Green = 1,
    /// Red, stored last.
    Red = 2,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Index of this channel inside a [`Bgr`] pixel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reads this channel from a pixel.
    #[inline]
    pub const fn of(self, pixel: Bgr) -> u8 {
        pixel[self as usize]
    }
}

/// Calculate BT.601 luma of a BGR pixel, rounded to the nearest level.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`, evaluated in Q14 fixed point with
/// round-half-up, bit-exact with the usual BGR-to-gray conversion used for
/// display histograms. The weights sum to `1 << 14`, so gray maps to itself.
///
/// # Example
/// ```
/// use ips_core::pixel::luma_bt601;
/// assert_eq!(luma_bt601([0, 0, 0]), 0);
/// assert_eq!(luma_bt601([255, 255, 255]), 255);
/// assert_eq!(luma_bt601([0, 0, 255]), 76);
/// ```
#[inline]
pub fn luma_bt601(pixel: Bgr) -> u8 {
    let y = BT601_LUMA_R * pixel[2] as u32
        + BT601_LUMA_G * pixel[1] as u32
        + BT601_LUMA_B * pixel[0] as u32;
    ((y + (1 << (BT601_SHIFT - 1))) >> BT601_SHIFT) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_order_is_bgr() {
        let px: Bgr = [10, 20, 30];
        assert_eq!(Channel::Blue.of(px), 10);
        assert_eq!(Channel::Green.of(px), 20);
        assert_eq!(Channel::Red.of(px), 30);
        let idx: Vec<usize> = Channel::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn test_luma_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma_bt601([v, v, v]), v);
        }
    }

    #[test]
    fn test_luma_weights() {
        // Pure green dominates, pure blue contributes least
        assert_eq!(luma_bt601([0, 255, 0]), 150);
        assert_eq!(luma_bt601([255, 0, 0]), 29);
    }

    #[test]
    fn test_luma_fixed_point_rounding() {
        // Sums sitting near .5 round the way the Q14 form does, not as f32
        assert_eq!(luma_bt601([135, 7, 0]), 20);
        assert_eq!(luma_bt601([20, 60, 0]), 37);
        assert_eq!(BT601_LUMA_R + BT601_LUMA_G + BT601_LUMA_B, 1 << BT601_SHIFT);
    }
}
