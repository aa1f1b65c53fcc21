//! Colour codings and packed YUV byte orders.

use crate::{ConvertError, ConvertResult};

/// The pixel encoding of a frame, as reported by an IIDC camera.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorCoding {
    Mono8,
    Yuv411,
    Yuv422,
    Yuv444,
    Rgb8,
    Mono16,
    Rgb16,
    Mono16s,
    Rgb16s,
    Raw8,
    Raw16,
}

/// Order of the luma and chroma bytes inside a packed YUV pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// U Y0 V Y1, the native layout of IIDC cameras.
    Uyvy,
    /// Y0 U Y1 V.
    Yuyv,
}

impl ColorCoding {
    /// Storage size of one pixel in bits.
    ///
    /// YUV411 packs four pixels into six bytes, so sizes are kept in bits
    /// rather than bytes.
    pub fn bits_per_pixel(self) -> usize {
        match self {
            ColorCoding::Mono8 | ColorCoding::Raw8 => 8,
            ColorCoding::Yuv411 => 12,
            ColorCoding::Yuv422
            | ColorCoding::Mono16
            | ColorCoding::Mono16s
            | ColorCoding::Raw16 => 16,
            ColorCoding::Yuv444 | ColorCoding::Rgb8 => 24,
            ColorCoding::Rgb16 | ColorCoding::Rgb16s => 48,
        }
    }

    /// Number of bits per sample.
    pub fn data_depth(self) -> u32 {
        match self {
            ColorCoding::Mono16
            | ColorCoding::Rgb16
            | ColorCoding::Mono16s
            | ColorCoding::Rgb16s
            | ColorCoding::Raw16 => 16,
            _ => 8,
        }
    }

    /// Whether the coding carries colour information.
    ///
    /// Raw Bayer codings count as monochrome until demosaiced.
    pub fn is_color(self) -> bool {
        match self {
            ColorCoding::Yuv411
            | ColorCoding::Yuv422
            | ColorCoding::Yuv444
            | ColorCoding::Rgb8
            | ColorCoding::Rgb16
            | ColorCoding::Rgb16s => true,
            ColorCoding::Mono8
            | ColorCoding::Mono16
            | ColorCoding::Mono16s
            | ColorCoding::Raw8
            | ColorCoding::Raw16 => false,
        }
    }

    /// Exact byte length of a `width` x `height` image in this coding.
    ///
    /// Returns `None` on overflow or when the image does not fill a whole
    /// number of bytes.
    pub fn buffer_len(self, width: usize, height: usize) -> Option<usize> {
        let bits = width
            .checked_mul(height)?
            .checked_mul(self.bits_per_pixel())?;
        if bits % 8 != 0 {
            return None;
        }
        Some(bits / 8)
    }
}

impl TryFrom<u32> for ColorCoding {
    type Error = ConvertError;

    fn try_from(raw: u32) -> ConvertResult<Self> {
        let coding = match raw {
            352 => ColorCoding::Mono8,
            353 => ColorCoding::Yuv411,
            354 => ColorCoding::Yuv422,
            355 => ColorCoding::Yuv444,
            356 => ColorCoding::Rgb8,
            357 => ColorCoding::Mono16,
            358 => ColorCoding::Rgb16,
            359 => ColorCoding::Mono16s,
            360 => ColorCoding::Rgb16s,
            361 => ColorCoding::Raw8,
            362 => ColorCoding::Raw16,
            _ => return Err(ConvertError::InvalidParameter("color coding")),
        };
        Ok(coding)
    }
}

impl TryFrom<u32> for ByteOrder {
    type Error = ConvertError;

    fn try_from(raw: u32) -> ConvertResult<Self> {
        match raw {
            800 => Ok(ByteOrder::Uyvy),
            801 => Ok(ByteOrder::Yuyv),
            _ => Err(ConvertError::InvalidByteOrder(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteOrder, ColorCoding};
    use crate::ConvertError;

    #[test]
    fn test_buffer_len() {
        assert_eq!(ColorCoding::Mono8.buffer_len(4, 2), Some(8));
        assert_eq!(ColorCoding::Yuv411.buffer_len(4, 2), Some(12));
        assert_eq!(ColorCoding::Yuv422.buffer_len(4, 2), Some(16));
        assert_eq!(ColorCoding::Rgb8.buffer_len(4, 2), Some(24));
        assert_eq!(ColorCoding::Rgb16.buffer_len(4, 2), Some(48));
        assert_eq!(ColorCoding::Yuv411.buffer_len(1, 1), None);
        assert_eq!(ColorCoding::Rgb16.buffer_len(usize::MAX, 2), None);
    }

    #[test]
    fn test_raw_codes() {
        assert_eq!(ColorCoding::try_from(354), Ok(ColorCoding::Yuv422));
        assert_eq!(ColorCoding::try_from(362), Ok(ColorCoding::Raw16));
        assert_eq!(
            ColorCoding::try_from(363),
            Err(ConvertError::InvalidParameter("color coding"))
        );

        assert_eq!(ByteOrder::try_from(800), Ok(ByteOrder::Uyvy));
        assert_eq!(ByteOrder::try_from(801), Ok(ByteOrder::Yuyv));
        assert_eq!(ByteOrder::try_from(7), Err(ConvertError::InvalidByteOrder(7)));
    }

    #[test]
    fn test_is_color() {
        assert!(ColorCoding::Yuv411.is_color());
        assert!(!ColorCoding::Raw16.is_color());
        assert_eq!(ColorCoding::Raw16.data_depth(), 16);
        assert_eq!(ColorCoding::Yuv444.data_depth(), 8);
    }
}
