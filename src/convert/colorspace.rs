//! Fixed-point RGB <-> YUV conversions.
//!
//! Coefficients are the ITU-R BT.601 weights scaled by 1024. All divisions
//! are arithmetic shifts, so negative terms round towards minus infinity.

use crate::sample::clip;

/// Convert one RGB8 pixel to `(y, u, v)`.
#[inline(always)]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let y = (306 * r + 601 * g + 117 * b) >> 10;
    let u = ((-172 * r - 340 * g + 512 * b) >> 10) + 128;
    let v = ((512 * r - 429 * g - 83 * b) >> 10) + 128;
    (clip(y, 255), clip(u, 255), clip(v, 255))
}

/// Convert one YUV pixel to `[r, g, b]`.
#[inline(always)]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = i32::from(y);
    let u = i32::from(u) - 128;
    let v = i32::from(v) - 128;
    let r = y + ((1436 * v) >> 10);
    let g = y - ((352 * u + 731 * v) >> 10);
    let b = y + ((1814 * u) >> 10);
    [clip(r, 255), clip(g, 255), clip(b, 255)]
}
