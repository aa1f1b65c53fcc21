//! Integer sample types shared by the 8-bit and 16-bit code paths.

use crate::{ConvertError, ConvertResult};

/// An unsigned pixel sample.
pub trait Sample: Copy + Default + Into<i32> + Send + Sync {
    /// Convert a value already clipped into this type's range.
    fn from_clipped(v: i32) -> Self;
}

impl Sample for u8 {
    #[inline(always)]
    fn from_clipped(v: i32) -> Self {
        v as u8
    }
}

impl Sample for u16 {
    #[inline(always)]
    fn from_clipped(v: i32) -> Self {
        v as u16
    }
}

/// Clamp `v` into `[0, max]` and narrow it to the sample type.
///
/// `max` is 255 for 8-bit output and `2^bits - 1` for 16-bit output.
#[inline(always)]
pub fn clip<T: Sample>(v: i32, max: i32) -> T {
    T::from_clipped(v.clamp(0, max))
}

/// Ceiling of a sample holding `bits` significant bits.
#[inline]
pub fn max_value(bits: u32) -> i32 {
    (1i32 << bits) - 1
}

/// Validate the significant bit count of a 16-bit source.
pub(crate) fn check_bits(bits: u32) -> ConvertResult<()> {
    if !(8..=16).contains(&bits) {
        return Err(ConvertError::InvalidParameter("bit depth"));
    }
    Ok(())
}

/// Reduce a big-endian 16-bit sample with `bits` significant bits to 8 bits.
#[inline(always)]
pub fn reduce_to_u8(v: u16, bits: u32) -> u8 {
    clip(i32::from(v) >> (bits - 8), 255)
}
