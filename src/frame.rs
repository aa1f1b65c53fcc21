//! Whole-frame conversion.
//!
//! A [`Frame`] carries what the capture layer knows about a buffer: its
//! size, colour coding, significant bits and, for raw sensors, the colour
//! filter. [`convert_frame`] picks the pixel-format converter or the
//! demosaicer from that description.

use tracing::{debug, trace};

use crate::bayer::{read_samples_u16, write_samples_u16};
use crate::demosaic::check_dimensions;
use crate::errcode::check_len;
use crate::sample::{check_bits, reduce_to_u8};
use crate::{
    convert_to_mono8, convert_to_rgb8, convert_to_yuv422, decode_16bit, decode_8bit,
    deinterlace_stereo, BayerMethod, BayerTile, ByteOrder, ColorCoding, ConvertError,
    ConvertResult,
};

/// Knobs of a frame conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConvertOptions {
    /// Layout of packed YUV422 output, and of YUV422 input.
    pub byte_order: ByteOrder,
    /// Demosaicing method for raw frames with a colour filter.
    pub bayer_method: BayerMethod,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            byte_order: ByteOrder::Uyvy,
            bayer_method: BayerMethod::Bilinear,
        }
    }
}

/// A captured frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub image: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub color_coding: ColorCoding,
    /// Significant bits of each sample. Only read for 16-bit codings.
    pub data_depth: u32,
    /// Colour filter of a raw sensor, if known.
    pub color_filter: Option<BayerTile>,
}

/// Caller-owned destination of a frame conversion.
#[derive(Debug)]
pub struct FrameMut<'a> {
    pub image: &'a mut [u8],
    pub color_coding: ColorCoding,
}

impl<'a> FrameMut<'a> {
    pub fn new(image: &'a mut [u8], color_coding: ColorCoding) -> Self {
        FrameMut {
            image,
            color_coding,
        }
    }
}

/// Convert `input` into the coding of `output`.
///
/// Raw frames with a colour filter are demosaiced when the target is RGB8
/// or RGB16; the output then has the size given by
/// [`BayerMethod::output_size`]. Every other request goes through the
/// pixel-format converters.
pub fn convert_frame(
    input: &Frame,
    output: &mut FrameMut,
    options: &ConvertOptions,
) -> ConvertResult<()> {
    use crate::ColorCoding::*;

    let (w, h) = (input.width, input.height);
    let (from, to) = (input.color_coding, output.color_coding);
    let order = options.byte_order;
    let bits = input.data_depth;

    match (from, input.color_filter, to) {
        (Raw8, Some(_), Rgb8) | (Raw8, Some(_), Rgb16) | (Raw16, Some(_), Rgb8) | (Raw16, Some(_), Rgb16) => {
            debayer_frame(input, output, options.bayer_method)
        }
        (_, _, Yuv422) => convert_to_yuv422(input.image, output.image, w, h, order, from, bits),
        (_, _, Mono8) => convert_to_mono8(input.image, output.image, w, h, order, from, bits),
        (_, _, Rgb8) => convert_to_rgb8(input.image, output.image, w, h, order, from, bits),
        _ => {
            let err = ConvertError::UnsupportedConversion(from, to);
            debug!(%err, w, h, "frame conversion rejected");
            Err(err)
        }
    }
}

/// Demosaic a raw frame into RGB8 or RGB16.
///
/// RAW16 samples are read big-endian and RGB16 samples written big-endian.
/// A RAW16 frame demosaiced to RGB8 is reduced by `data_depth - 8` bits.
pub fn debayer_frame(input: &Frame, output: &mut FrameMut, method: BayerMethod) -> ConvertResult<()> {
    let res = debayer(input, output, method);
    if let Err(ref err) = res {
        debug!(
            %err,
            from = ?input.color_coding,
            to = ?output.color_coding,
            ?method,
            w = input.width,
            h = input.height,
            "debayer rejected"
        );
    }
    res
}

fn debayer(input: &Frame, output: &mut FrameMut, method: BayerMethod) -> ConvertResult<()> {
    let tile = input
        .color_filter
        .ok_or(ConvertError::InvalidParameter("color filter"))?;
    let (w, h) = (input.width, input.height);
    let (from, to) = (input.color_coding, output.color_coding);

    match (from, to) {
        (ColorCoding::Raw8, ColorCoding::Rgb8) => {
            return decode_8bit(input.image, output.image, w, h, tile, method);
        }
        (ColorCoding::Raw8, ColorCoding::Rgb16)
        | (ColorCoding::Raw16, ColorCoding::Rgb8)
        | (ColorCoding::Raw16, ColorCoding::Rgb16) => {}
        _ => return Err(ConvertError::UnsupportedConversion(from, to)),
    }

    check_dimensions(w, h)?;
    let bits = if from == ColorCoding::Raw8 {
        8
    } else {
        check_bits(input.data_depth)?;
        input.data_depth
    };

    let (ow, oh) = method.output_size(w, h);
    let in_len = from
        .buffer_len(w, h)
        .ok_or(ConvertError::InvalidDimensions(w, h))?;
    let out_len = to
        .buffer_len(ow, oh)
        .ok_or(ConvertError::InvalidDimensions(w, h))?;
    check_len(in_len, input.image.len())?;
    check_len(out_len, output.image.len())?;

    trace!(?from, ?to, ?tile, ?method, w, h, bits, "debayer frame");

    let mut bayer = vec![0u16; w * h];
    if from == ColorCoding::Raw8 {
        for (d, &s) in bayer.iter_mut().zip(input.image.iter()) {
            *d = u16::from(s);
        }
    } else {
        read_samples_u16(input.image, &mut bayer)?;
    }

    let mut rgb = vec![0u16; 3 * ow * oh];
    decode_16bit(&bayer, &mut rgb, w, h, tile, method, bits)?;

    if to == ColorCoding::Rgb16 {
        write_samples_u16(&rgb, output.image)
    } else {
        for (d, &s) in output.image.iter_mut().zip(rgb.iter()) {
            *d = reduce_to_u8(s, bits);
        }
        Ok(())
    }
}

/// Split a 16-bit stereo frame into a MONO8/RAW8 frame of twice the height.
pub fn deinterlace_stereo_frame(input: &Frame, output: &mut FrameMut) -> ConvertResult<()> {
    let (from, to) = (input.color_coding, output.color_coding);
    match (from, to) {
        (ColorCoding::Mono16, ColorCoding::Mono8)
        | (ColorCoding::Mono16, ColorCoding::Raw8)
        | (ColorCoding::Raw16, ColorCoding::Mono8)
        | (ColorCoding::Raw16, ColorCoding::Raw8) => {
            deinterlace_stereo(input.image, output.image, input.width, input.height)
        }
        _ => {
            let err = ConvertError::UnsupportedConversion(from, to);
            debug!(%err, "stereo frame rejected");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{convert_frame, debayer_frame, deinterlace_stereo_frame, ConvertOptions, Frame, FrameMut};
    use crate::{decode_8bit, BayerMethod, BayerTile, ByteOrder, ColorCoding, ConvertError};

    // R: set.seed(0); matrix(floor(runif(n=16, min=0, max=256)), nrow=4, byrow=TRUE)
    const SRC: [u8; 16] = [
        229, 67, 95,146,
        232, 51,229,241,
        169,161, 15, 52,
         45,175, 98,197 ];

    fn raw8(image: &[u8], color_filter: Option<BayerTile>) -> Frame {
        Frame {
            image,
            width: 4,
            height: 4,
            color_coding: ColorCoding::Raw8,
            data_depth: 8,
            color_filter,
        }
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.byte_order, ByteOrder::Uyvy);
        assert_eq!(options.bayer_method, BayerMethod::Bilinear);
    }

    #[test]
    fn test_raw8_with_filter_demosaiced() {
        let mut expected = [0u8; 48];
        decode_8bit(&SRC, &mut expected, 4, 4, BayerTile::RGGB, BayerMethod::Bilinear).expect("decode");

        let mut buf = [0u8; 48];
        let input = raw8(&SRC, Some(BayerTile::RGGB));
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb8);
        convert_frame(&input, &mut output, &ConvertOptions::default()).expect("frame");
        assert_eq!(&buf[..], &expected[..]);
    }

    #[test]
    fn test_raw8_without_filter_is_mono() {
        let mut buf = [0u8; 48];
        let input = raw8(&SRC, None);
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb8);
        convert_frame(&input, &mut output, &ConvertOptions::default()).expect("frame");
        assert_eq!(&buf[..6], &[229, 229, 229, 67, 67, 67]);
    }

    #[test]
    fn test_raw8_to_yuv422_uses_byte_order() {
        let mut buf = [0u8; 32];
        let input = raw8(&SRC, Some(BayerTile::RGGB));
        let mut output = FrameMut::new(&mut buf, ColorCoding::Yuv422);
        let options = ConvertOptions {
            byte_order: ByteOrder::Yuyv,
            ..ConvertOptions::default()
        };
        convert_frame(&input, &mut output, &options).expect("frame");
        assert_eq!(&buf[..4], &[229, 128, 67, 128]);
    }

    #[test]
    fn test_raw16_to_rgb8_reduced() {
        let mut image = [0u8; 32];
        for px in image.chunks_exact_mut(2) {
            px.copy_from_slice(&[0x06, 0x40]);
        }

        let input = Frame {
            image: &image,
            width: 4,
            height: 4,
            color_coding: ColorCoding::Raw16,
            data_depth: 12,
            color_filter: Some(BayerTile::GBRG),
        };
        let mut buf = [0u8; 12];
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb8);
        let options = ConvertOptions {
            bayer_method: BayerMethod::Downsample,
            ..ConvertOptions::default()
        };
        convert_frame(&input, &mut output, &options).expect("frame");
        assert!(buf.iter().all(|&v| v == 100));
    }

    #[test]
    fn test_raw16_to_rgb16() {
        let image = [
            0x0b,0xb8, 0x03,0xe8,
            0x03,0xe9, 0x0f,0xa0 ];

        let input = Frame {
            image: &image,
            width: 2,
            height: 2,
            color_coding: ColorCoding::Raw16,
            data_depth: 12,
            color_filter: Some(BayerTile::BGGR),
        };
        let mut buf = [0u8; 6];
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb16);
        debayer_frame(&input, &mut output, BayerMethod::Downsample).expect("debayer");
        assert_eq!(buf, [0x0f, 0xa0, 0x03, 0xe8, 0x0b, 0xb8]);
    }

    #[test]
    fn test_debayer_rejected() {
        let mut buf = [0xa5u8; 48];

        let input = raw8(&SRC, None);
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb8);
        assert_eq!(
            debayer_frame(&input, &mut output, BayerMethod::Simple),
            Err(ConvertError::InvalidParameter("color filter"))
        );

        let input = raw8(&SRC, Some(BayerTile::RGGB));
        let mut output = FrameMut::new(&mut buf, ColorCoding::Yuv422);
        assert_eq!(
            debayer_frame(&input, &mut output, BayerMethod::Simple),
            Err(ConvertError::UnsupportedConversion(ColorCoding::Raw8, ColorCoding::Yuv422))
        );

        let input = Frame {
            color_coding: ColorCoding::Raw16,
            data_depth: 12,
            ..raw8(&SRC, Some(BayerTile::RGGB))
        };
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb16);
        assert_eq!(
            debayer_frame(&input, &mut output, BayerMethod::Simple),
            Err(ConvertError::BufferSizeMismatch(32, 16))
        );
        assert!(buf.iter().all(|&b| b == 0xa5));
    }

    #[test]
    fn test_unsupported_target() {
        let mut buf = [0u8; 96];
        let input = raw8(&SRC, None);
        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb16);
        assert_eq!(
            convert_frame(&input, &mut output, &ConvertOptions::default()),
            Err(ConvertError::UnsupportedConversion(ColorCoding::Raw8, ColorCoding::Rgb16))
        );
    }

    #[test]
    fn test_stereo_frame() {
        let image = [1, 11, 2, 12];
        let input = Frame {
            image: &image,
            width: 2,
            height: 1,
            color_coding: ColorCoding::Mono16,
            data_depth: 16,
            color_filter: None,
        };

        let mut buf = [0u8; 4];
        let mut output = FrameMut::new(&mut buf, ColorCoding::Raw8);
        deinterlace_stereo_frame(&input, &mut output).expect("stereo");
        assert_eq!(buf, [1, 2, 11, 12]);

        let mut output = FrameMut::new(&mut buf, ColorCoding::Rgb8);
        assert_eq!(
            deinterlace_stereo_frame(&input, &mut output),
            Err(ConvertError::UnsupportedConversion(ColorCoding::Mono16, ColorCoding::Rgb8))
        );
    }
}
