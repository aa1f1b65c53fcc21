//! Conversions to packed YUV422.

use byteorder::{BigEndian, ByteOrder as Endianness};

use crate::convert::colorspace::rgb_to_yuv;
use crate::convert::Job;
use crate::sample::reduce_to_u8;
use crate::{ByteOrder, ColorCoding};

pub(crate) fn run(job: &Job, src: &[u8], dst: &mut [u8]) {
    let order = job.order;
    match job.source {
        ColorCoding::Yuv422 => from_yuv422(src, dst, order),
        ColorCoding::Yuv411 => from_yuv411(src, dst, order),
        ColorCoding::Yuv444 => from_yuv444(src, dst, order),
        ColorCoding::Rgb8 => from_rgb(src, dst, order, 3, |s| s[0]),
        ColorCoding::Rgb16 => {
            let bits = job.bits;
            from_rgb(src, dst, order, 6, move |s| {
                reduce_to_u8(BigEndian::read_u16(s), bits)
            })
        }
        ColorCoding::Mono8 | ColorCoding::Raw8 => from_mono(job, src, dst, 1, |s| s[0]),
        ColorCoding::Mono16 | ColorCoding::Raw16 => {
            let bits = job.bits;
            from_mono(job, src, dst, 2, move |s| {
                reduce_to_u8(BigEndian::read_u16(s), bits)
            })
        }
        // Rejected by validation.
        _ => {}
    }
}

/// Store one pixel pair.
#[inline(always)]
fn put_pair(d: &mut [u8], order: ByteOrder, y0: u8, u: u8, y1: u8, v: u8) {
    match order {
        ByteOrder::Uyvy => {
            d[0] = u;
            d[1] = y0;
            d[2] = v;
            d[3] = y1;
        }
        ByteOrder::Yuyv => {
            d[0] = y0;
            d[1] = u;
            d[2] = y1;
            d[3] = v;
        }
    }
}

/// The source is UYVY.
fn from_yuv422(src: &[u8], dst: &mut [u8], order: ByteOrder) {
    match order {
        ByteOrder::Uyvy => dst.copy_from_slice(src),
        ByteOrder::Yuyv => {
            for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
                d[0] = s[1];
                d[1] = s[0];
            }
        }
    }
}

/// `U Y0 Y1 V Y2 Y3` to two pairs sharing the chroma.
fn from_yuv411(src: &[u8], dst: &mut [u8], order: ByteOrder) {
    for (s, d) in src.chunks_exact(6).zip(dst.chunks_exact_mut(8)) {
        let (u, v) = (s[0], s[3]);
        put_pair(&mut d[..4], order, s[1], u, s[2], v);
        put_pair(&mut d[4..], order, s[4], u, s[5], v);
    }
}

/// `U Y V` pixels; chroma of each pair is averaged.
fn from_yuv444(src: &[u8], dst: &mut [u8], order: ByteOrder) {
    for (s, d) in src.chunks_exact(6).zip(dst.chunks_exact_mut(4)) {
        let u = mean(s[0], s[3]);
        let v = mean(s[2], s[5]);
        put_pair(d, order, s[1], u, s[4], v);
    }
}

/// Interleaved RGB pixels of `n` bytes each, three channels read by `channel`.
fn from_rgb<F>(src: &[u8], dst: &mut [u8], order: ByteOrder, n: usize, channel: F)
where
    F: Fn(&[u8]) -> u8,
{
    let step = n / 3;
    let pixel = |p: &[u8]| {
        rgb_to_yuv(
            channel(&p[..step]),
            channel(&p[step..2 * step]),
            channel(&p[2 * step..]),
        )
    };

    for (s, d) in src.chunks_exact(2 * n).zip(dst.chunks_exact_mut(4)) {
        let (y0, u0, v0) = pixel(&s[..n]);
        let (y1, u1, v1) = pixel(&s[n..]);
        put_pair(d, order, y0, mean(u0, u1), y1, mean(v0, v1));
    }
}

/// Luma samples of `n` bytes each with neutral chroma.
fn from_mono<F>(job: &Job, src: &[u8], dst: &mut [u8], n: usize, luma: F)
where
    F: Fn(&[u8]) -> u8,
{
    let src_stride = n * job.w;
    let dst_stride = 2 * job.padded_width();

    for (row, out) in src.chunks_exact(src_stride).zip(dst.chunks_exact_mut(dst_stride)) {
        // A trailing odd pixel pairs with itself.
        for (s, d) in row.chunks(2 * n).zip(out.chunks_exact_mut(4)) {
            let y0 = luma(&s[..n]);
            let y1 = luma(&s[s.len() - n..]);
            put_pair(d, job.order, y0, 128, y1, 128);
        }
    }
}

#[inline(always)]
fn mean(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) >> 1) as u8
}
