//! Conversion of packed colour codings to YUV422, MONO8 and RGB8.
//!
//! Every entry point validates the whole request before the destination is
//! touched, in a fixed order: the (source, target) pair, the dimensions, the
//! bit depth of 16-bit sources, then the two buffer lengths.

use tracing::{debug, trace};

use crate::errcode::check_len;
use crate::sample::check_bits;
use crate::{ByteOrder, ColorCoding, ConvertError, ConvertResult};

pub mod colorspace;
mod mono8;
mod rgb8;
mod stereo;
mod yuv422;

pub use self::stereo::deinterlace_stereo;

/// Convert an image to packed YUV422.
///
/// `byte_order` selects the layout of the output pairs. A YUV422 source is
/// taken to be UYVY. Monochrome sources of odd width produce rows of
/// `width + 1` pixels, the last column repeated.
///
/// # Examples
///
/// ```
/// use pixconv::{convert_to_yuv422, ByteOrder, ColorCoding};
///
/// let rgb = [100u8, 100, 100, 50, 50, 50];
/// let mut yuv = [0u8; 4];
///
/// convert_to_yuv422(&rgb, &mut yuv, 2, 1, ByteOrder::Uyvy, ColorCoding::Rgb8, 8).unwrap();
/// assert_eq!(yuv, [128, 100, 128, 50]);
/// ```
pub fn convert_to_yuv422(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    byte_order: ByteOrder,
    source_coding: ColorCoding,
    bits: u32,
) -> ConvertResult<()> {
    let job = Job {
        source: source_coding,
        target: ColorCoding::Yuv422,
        w: width,
        h: height,
        order: byte_order,
        bits,
    };
    job.validate(src.len(), dst.len())?;
    yuv422::run(&job, src, dst);
    Ok(())
}

/// Convert an image to MONO8.
///
/// 16-bit sources are shifted down by `bits - 8` and saturated.
pub fn convert_to_mono8(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    byte_order: ByteOrder,
    source_coding: ColorCoding,
    bits: u32,
) -> ConvertResult<()> {
    let job = Job {
        source: source_coding,
        target: ColorCoding::Mono8,
        w: width,
        h: height,
        order: byte_order,
        bits,
    };
    job.validate(src.len(), dst.len())?;
    mono8::run(&job, src, dst);
    Ok(())
}

/// Convert an image to interleaved RGB8.
///
/// For a YUV422 source `byte_order` describes the source layout. Raw Bayer
/// sources are treated as monochrome; use [`decode_8bit`](crate::decode_8bit)
/// to reconstruct colour.
pub fn convert_to_rgb8(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    byte_order: ByteOrder,
    source_coding: ColorCoding,
    bits: u32,
) -> ConvertResult<()> {
    let job = Job {
        source: source_coding,
        target: ColorCoding::Rgb8,
        w: width,
        h: height,
        order: byte_order,
        bits,
    };
    job.validate(src.len(), dst.len())?;
    rgb8::run(&job, src, dst);
    Ok(())
}

/// One validated conversion request.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Job {
    pub source: ColorCoding,
    pub target: ColorCoding,
    pub w: usize,
    pub h: usize,
    pub order: ByteOrder,
    pub bits: u32,
}

impl Job {
    fn validate(&self, src_len: usize, dst_len: usize) -> ConvertResult<()> {
        let res = self.check(src_len, dst_len);
        match res {
            Ok(()) => trace!(
                from = ?self.source,
                to = ?self.target,
                w = self.w,
                h = self.h,
                order = ?self.order,
                bits = self.bits,
                "convert"
            ),
            Err(ref err) => debug!(
                %err,
                from = ?self.source,
                to = ?self.target,
                w = self.w,
                h = self.h,
                "conversion rejected"
            ),
        }
        res
    }

    fn check(&self, src_len: usize, dst_len: usize) -> ConvertResult<()> {
        use crate::ColorCoding::*;

        let supported = match self.target {
            Yuv422 => matches!(
                self.source,
                Yuv422 | Yuv411 | Yuv444 | Rgb8 | Rgb16 | Mono8 | Raw8 | Mono16 | Raw16
            ),
            Mono8 => matches!(self.source, Mono8 | Raw8 | Mono16 | Raw16),
            Rgb8 => matches!(
                self.source,
                Rgb8 | Rgb16 | Yuv444 | Yuv422 | Yuv411 | Mono8 | Raw8 | Mono16 | Raw16
            ),
            _ => false,
        };
        if !supported {
            return Err(ConvertError::UnsupportedConversion(self.source, self.target));
        }

        let (w, h) = (self.w, self.h);
        let bad_width = match self.source {
            Yuv411 => w % 4 != 0,
            Yuv422 => w % 2 != 0,
            _ => self.target == Yuv422 && !self.source_is_mono() && w % 2 != 0,
        };
        if w == 0 || h == 0 || bad_width {
            return Err(ConvertError::InvalidDimensions(w, h));
        }

        if self.source.data_depth() == 16 {
            check_bits(self.bits)?;
        }

        let expected_src = self
            .source
            .buffer_len(w, h)
            .ok_or(ConvertError::InvalidDimensions(w, h))?;
        let expected_dst = self
            .target
            .buffer_len(self.padded_width(), h)
            .ok_or(ConvertError::InvalidDimensions(w, h))?;
        check_len(expected_src, src_len)?;
        check_len(expected_dst, dst_len)
    }

    /// Whether the source carries luma only.
    pub fn source_is_mono(&self) -> bool {
        !self.source.is_color()
    }

    /// Width of a destination row in pixels.
    ///
    /// Monochrome data written as YUV422 is padded to an even width.
    pub fn padded_width(&self) -> usize {
        if self.target == ColorCoding::Yuv422 && self.source_is_mono() {
            self.w + self.w % 2
        } else {
            self.w
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{convert_to_mono8, convert_to_rgb8, convert_to_yuv422};
    use crate::{ByteOrder, ColorCoding, ConvertError};

    #[test]
    fn test_unsupported_checked_first() {
        // Everything else about this request is wrong too.
        let mut dst = [0u8; 1];
        let res = convert_to_mono8(&[], &mut dst, 0, 0, ByteOrder::Uyvy, ColorCoding::Yuv422, 0);
        assert_eq!(
            res,
            Err(ConvertError::UnsupportedConversion(ColorCoding::Yuv422, ColorCoding::Mono8))
        );

        let res = convert_to_rgb8(&[], &mut dst, 1, 1, ByteOrder::Uyvy, ColorCoding::Rgb16s, 16);
        assert_eq!(
            res,
            Err(ConvertError::UnsupportedConversion(ColorCoding::Rgb16s, ColorCoding::Rgb8))
        );
    }

    #[test]
    fn test_dimensions() {
        let mut dst = [0u8; 64];
        let res = convert_to_yuv422(&[], &mut dst, 0, 2, ByteOrder::Uyvy, ColorCoding::Mono8, 8);
        assert_eq!(res, Err(ConvertError::InvalidDimensions(0, 2)));

        let src = [0u8; 9];
        let res = convert_to_yuv422(&src, &mut dst, 1, 1, ByteOrder::Uyvy, ColorCoding::Rgb8, 8);
        assert_eq!(res, Err(ConvertError::InvalidDimensions(1, 1)));

        let src = [0u8; 12];
        let res = convert_to_rgb8(&src, &mut dst, 6, 1, ByteOrder::Uyvy, ColorCoding::Yuv411, 8);
        assert_eq!(res, Err(ConvertError::InvalidDimensions(6, 1)));

        let res = convert_to_rgb8(&src, &mut dst, 3, 2, ByteOrder::Uyvy, ColorCoding::Yuv422, 8);
        assert_eq!(res, Err(ConvertError::InvalidDimensions(3, 2)));
    }

    #[test]
    fn test_bit_depth() {
        let src = [0u8; 8];
        let mut dst = [0u8; 4];
        for &bits in [0, 7, 17, 32].iter() {
            let res = convert_to_mono8(&src, &mut dst, 2, 2, ByteOrder::Uyvy, ColorCoding::Mono16, bits);
            assert_eq!(res, Err(ConvertError::InvalidParameter("bit depth")));
        }

        // 8-bit sources ignore the bit depth.
        let src = [0u8; 4];
        let res = convert_to_mono8(&src, &mut dst, 2, 2, ByteOrder::Uyvy, ColorCoding::Raw8, 0);
        assert_eq!(res, Ok(()));
    }

    #[test]
    fn test_buffer_sizes_untouched() {
        let src = [7u8; 12];
        let mut dst = [0xa5u8; 7];
        let res = convert_to_yuv422(&src, &mut dst, 2, 2, ByteOrder::Uyvy, ColorCoding::Rgb8, 8);
        assert_eq!(res, Err(ConvertError::BufferSizeMismatch(8, 7)));
        assert!(dst.iter().all(|&b| b == 0xa5));

        let mut dst = [0xa5u8; 8];
        let res = convert_to_yuv422(&src[..11], &mut dst, 2, 2, ByteOrder::Uyvy, ColorCoding::Rgb8, 8);
        assert_eq!(res, Err(ConvertError::BufferSizeMismatch(12, 11)));
        assert!(dst.iter().all(|&b| b == 0xa5));
    }

    #[test]
    fn test_odd_mono_padded() {
        let src = [0u8; 3];
        let mut dst = [0u8; 6];
        let res = convert_to_yuv422(&src, &mut dst, 3, 1, ByteOrder::Uyvy, ColorCoding::Mono8, 8);
        assert_eq!(res, Err(ConvertError::BufferSizeMismatch(8, 6)));
    }
}
