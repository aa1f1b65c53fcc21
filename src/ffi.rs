//! Foreign function interface.
//!
//! Every function takes raw IIDC codes and returns 0 on success or the
//! negative [`ConvertError::code`] of the failure. Buffer lengths are given
//! in elements of the pointed-to type.

use std::slice;

use libc::{c_int, c_uchar, c_uint, c_ushort, size_t};
use tracing::error;

use crate::{
    convert_to_mono8, convert_to_rgb8, convert_to_yuv422, decode_16bit, decode_8bit,
    deinterlace_stereo, BayerMethod, BayerTile, ByteOrder, ColorCoding, ConvertError,
    ConvertResult,
};

type ConvertFn = fn(&[u8], &mut [u8], usize, usize, ByteOrder, ColorCoding, u32) -> ConvertResult<()>;

/// Report a result through the C interface.
fn status(func: &'static str, res: ConvertResult<()>) -> c_int {
    match res {
        Ok(()) => 0,
        Err(err) => {
            error!(%err, func, "conversion failed");
            err.code()
        }
    }
}

/// Borrow a source and a destination buffer.
///
/// # Safety
///
/// Non-null pointers must be valid for their lengths and must not overlap.
unsafe fn buffers<'a, S, D>(
    src: *const S,
    src_len: size_t,
    dst: *mut D,
    dst_len: size_t,
) -> ConvertResult<(&'a [S], &'a mut [D])> {
    if src.is_null() || dst.is_null() {
        return Err(ConvertError::InvalidParameter("null buffer"));
    }
    Ok((
        slice::from_raw_parts(src, src_len),
        slice::from_raw_parts_mut(dst, dst_len),
    ))
}

#[allow(clippy::too_many_arguments)]
unsafe fn convert(
    f: ConvertFn,
    src: *const c_uchar,
    src_len: size_t,
    dst: *mut c_uchar,
    dst_len: size_t,
    width: c_uint,
    height: c_uint,
    byte_order: c_uint,
    source_coding: c_uint,
    bits: c_uint,
) -> ConvertResult<()> {
    let byte_order = ByteOrder::try_from(byte_order)?;
    let source_coding = ColorCoding::try_from(source_coding)?;
    let (src, dst) = buffers(src, src_len, dst, dst_len)?;
    f(src, dst, width as usize, height as usize, byte_order, source_coding, bits)
}

/// Convert to packed YUV422.
///
/// # Safety
///
/// `src` and `dst` must be valid for `src_len` and `dst_len` bytes and must
/// not overlap.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pixconv_convert_to_yuv422(
    src: *const c_uchar,
    src_len: size_t,
    dst: *mut c_uchar,
    dst_len: size_t,
    width: c_uint,
    height: c_uint,
    byte_order: c_uint,
    source_coding: c_uint,
    bits: c_uint,
) -> c_int {
    let res = convert(
        convert_to_yuv422,
        src,
        src_len,
        dst,
        dst_len,
        width,
        height,
        byte_order,
        source_coding,
        bits,
    );
    status("pixconv_convert_to_yuv422", res)
}

/// Convert to MONO8.
///
/// # Safety
///
/// As [`pixconv_convert_to_yuv422`].
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pixconv_convert_to_mono8(
    src: *const c_uchar,
    src_len: size_t,
    dst: *mut c_uchar,
    dst_len: size_t,
    width: c_uint,
    height: c_uint,
    byte_order: c_uint,
    source_coding: c_uint,
    bits: c_uint,
) -> c_int {
    let res = convert(
        convert_to_mono8,
        src,
        src_len,
        dst,
        dst_len,
        width,
        height,
        byte_order,
        source_coding,
        bits,
    );
    status("pixconv_convert_to_mono8", res)
}

/// Convert to RGB8.
///
/// # Safety
///
/// As [`pixconv_convert_to_yuv422`].
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pixconv_convert_to_rgb8(
    src: *const c_uchar,
    src_len: size_t,
    dst: *mut c_uchar,
    dst_len: size_t,
    width: c_uint,
    height: c_uint,
    byte_order: c_uint,
    source_coding: c_uint,
    bits: c_uint,
) -> c_int {
    let res = convert(
        convert_to_rgb8,
        src,
        src_len,
        dst,
        dst_len,
        width,
        height,
        byte_order,
        source_coding,
        bits,
    );
    status("pixconv_convert_to_rgb8", res)
}

/// Demosaic an 8-bit mosaic.
///
/// # Safety
///
/// `bayer` must be valid for `bayer_len` bytes and `rgb` for `rgb_len`
/// bytes; they must not overlap.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pixconv_bayer_decoding_8bit(
    bayer: *const c_uchar,
    bayer_len: size_t,
    rgb: *mut c_uchar,
    rgb_len: size_t,
    width: c_uint,
    height: c_uint,
    tile: c_uint,
    method: c_uint,
) -> c_int {
    let res = BayerTile::try_from(tile).and_then(|tile| {
        let method = BayerMethod::try_from(method)?;
        let (bayer, rgb) = buffers(bayer, bayer_len, rgb, rgb_len)?;
        decode_8bit(bayer, rgb, width as usize, height as usize, tile, method)
    });
    status("pixconv_bayer_decoding_8bit", res)
}

/// Demosaic a 16-bit mosaic with `bits` significant bits.
///
/// # Safety
///
/// `bayer` must be valid for `bayer_len` samples and `rgb` for `rgb_len`
/// samples; they must not overlap.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pixconv_bayer_decoding_16bit(
    bayer: *const c_ushort,
    bayer_len: size_t,
    rgb: *mut c_ushort,
    rgb_len: size_t,
    width: c_uint,
    height: c_uint,
    tile: c_uint,
    method: c_uint,
    bits: c_uint,
) -> c_int {
    let res = BayerTile::try_from(tile).and_then(|tile| {
        let method = BayerMethod::try_from(method)?;
        let (bayer, rgb) = buffers(bayer, bayer_len, rgb, rgb_len)?;
        decode_16bit(bayer, rgb, width as usize, height as usize, tile, method, bits)
    });
    status("pixconv_bayer_decoding_16bit", res)
}

/// Split an interleaved 16-bit stereo image into two stacked 8-bit images.
///
/// # Safety
///
/// As [`pixconv_convert_to_yuv422`].
#[no_mangle]
pub unsafe extern "C" fn pixconv_deinterlace_stereo(
    src: *const c_uchar,
    src_len: size_t,
    dst: *mut c_uchar,
    dst_len: size_t,
    width: c_uint,
    height: c_uint,
) -> c_int {
    let res = buffers(src, src_len, dst, dst_len)
        .and_then(|(src, dst)| deinterlace_stereo(src, dst, width as usize, height as usize));
    status("pixconv_deinterlace_stereo", res)
}
