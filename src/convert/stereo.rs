//! Stereo deinterlacing.
//!
//! Stereo cameras deliver both images in one 16-bit frame, the two 8-bit
//! views interleaved byte by byte.

use tracing::{debug, trace};

use crate::errcode::check_len;
use crate::{ConvertError, ConvertResult};

/// Split interleaved stereo pixels into two stacked 8-bit images.
///
/// `src` holds `width * height` two-byte pixels. Byte 0 of every pixel goes
/// to the top half of `dst`, byte 1 to the bottom half, so `dst` is a
/// `width` x `2 * height` image of the same byte length.
pub fn deinterlace_stereo(src: &[u8], dst: &mut [u8], width: usize, height: usize) -> ConvertResult<()> {
    let res = check(src.len(), dst.len(), width, height);
    let n = match res {
        Ok(n) => n,
        Err(err) => {
            debug!(%err, w = width, h = height, "stereo deinterlace rejected");
            return Err(err);
        }
    };

    trace!(w = width, h = height, "stereo deinterlace");
    let (top, bottom) = dst.split_at_mut(n);
    for ((s, t), b) in src.chunks_exact(2).zip(top.iter_mut()).zip(bottom.iter_mut()) {
        *t = s[0];
        *b = s[1];
    }
    Ok(())
}

/// Number of pixels in one view.
fn check(src_len: usize, dst_len: usize, w: usize, h: usize) -> ConvertResult<usize> {
    if w == 0 || h == 0 {
        return Err(ConvertError::InvalidDimensions(w, h));
    }
    let n = w.checked_mul(h).ok_or(ConvertError::InvalidDimensions(w, h))?;
    let len = n.checked_mul(2).ok_or(ConvertError::InvalidDimensions(w, h))?;
    check_len(len, src_len)?;
    check_len(len, dst_len)?;
    Ok(n)
}
