//! Collection of demosaicing algorithms.
//!
//! Every algorithm is written once, generic over the sample type, and
//! instantiated for 8-bit and 16-bit mosaics. The two instantiations differ
//! only in the clip ceiling of the output raster.

use tracing::{debug, trace};

use crate::raster::{Mosaic, RasterMut};
use crate::sample::{check_bits, max_value, Sample};
use crate::{BayerTile, ConvertError, ConvertResult};

/// The demosaicing algorithm to use to fill in the missing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BayerMethod {
    Nearest,
    Simple,
    Bilinear,
    HqLinear,
    Downsample,
    EdgeSense,
}

mod bilinear;
mod downsample;
mod edgesense;
mod hqlinear;
mod nearestneighbour;
mod none;
mod simple;

impl BayerMethod {
    /// Output dimensions produced from a `w` x `h` mosaic.
    pub fn output_size(self, w: usize, h: usize) -> (usize, usize) {
        match self {
            BayerMethod::Downsample => (w / 2, h / 2),
            _ => (w, h),
        }
    }
}

impl TryFrom<u32> for BayerMethod {
    type Error = ConvertError;

    fn try_from(raw: u32) -> ConvertResult<Self> {
        let method = match raw {
            0 => BayerMethod::Nearest,
            1 => BayerMethod::Simple,
            2 => BayerMethod::Bilinear,
            3 => BayerMethod::HqLinear,
            4 => BayerMethod::Downsample,
            5 => BayerMethod::EdgeSense,
            _ => return Err(ConvertError::InvalidParameter("bayer method")),
        };
        Ok(method)
    }
}

/// Demosaic an 8-bit mosaic into interleaved RGB8.
///
/// `rgb` must hold `3 * width * height` bytes, or a quarter of that for
/// [`BayerMethod::Downsample`]. Both dimensions must be even.
///
/// # Examples
///
/// ```
/// use pixconv::{decode_8bit, BayerMethod, BayerTile};
///
/// const IMG_W: usize = 4;
/// const IMG_H: usize = 4;
/// let bayer = [128u8; IMG_W * IMG_H];
/// let mut rgb = [0u8; 3 * IMG_W * IMG_H];
///
/// decode_8bit(&bayer, &mut rgb, IMG_W, IMG_H, BayerTile::RGGB, BayerMethod::Bilinear).unwrap();
/// assert_eq!(&rgb[3 * 5..3 * 6], &[128, 128, 128]);
/// ```
pub fn decode_8bit(
    bayer: &[u8],
    rgb: &mut [u8],
    width: usize,
    height: usize,
    tile: BayerTile,
    method: BayerMethod,
) -> ConvertResult<()> {
    run(bayer, rgb, width, height, tile, method, 255)
}

/// Demosaic a 16-bit mosaic with `bits` significant bits into interleaved RGB16.
///
/// Output samples are clipped into `[0, 2^bits - 1]`.
pub fn decode_16bit(
    bayer: &[u16],
    rgb: &mut [u16],
    width: usize,
    height: usize,
    tile: BayerTile,
    method: BayerMethod,
    bits: u32,
) -> ConvertResult<()> {
    check_bits(bits)?;
    run(bayer, rgb, width, height, tile, method, max_value(bits))
}

fn run<T: Sample>(
    bayer: &[T],
    rgb: &mut [T],
    w: usize,
    h: usize,
    tile: BayerTile,
    method: BayerMethod,
    max: i32,
) -> ConvertResult<()> {
    let res = check_dimensions(w, h).and_then(|_| {
        let src = Mosaic::new(w, h, bayer)?;
        let (ow, oh) = method.output_size(w, h);
        let dst = RasterMut::new(ow, oh, max, rgb)?;
        Ok((src, dst))
    });

    let (src, mut dst) = match res {
        Ok(views) => views,
        Err(err) => {
            debug!(%err, ?tile, ?method, w, h, "bayer decode rejected");
            return Err(err);
        }
    };

    trace!(?tile, ?method, w, h, max, "bayer decode");
    match method {
        BayerMethod::Nearest => nearestneighbour::run(&src, &mut dst, tile),
        BayerMethod::Simple => simple::run(&src, &mut dst, tile),
        BayerMethod::Bilinear => bilinear::run(&src, &mut dst, tile),
        BayerMethod::HqLinear => hqlinear::run(&src, &mut dst, tile),
        BayerMethod::Downsample => downsample::run(&src, &mut dst, tile),
        BayerMethod::EdgeSense => edgesense::run(&src, &mut dst, tile),
    }

    Ok(())
}

/// Every algorithm works on whole 2x2 tiles.
pub(crate) fn check_dimensions(w: usize, h: usize) -> ConvertResult<()> {
    if w < 2 || h < 2 || w % 2 != 0 || h % 2 != 0 {
        return Err(ConvertError::InvalidDimensions(w, h));
    }
    Ok(())
}
