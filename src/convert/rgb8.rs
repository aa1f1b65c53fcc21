//! Conversions to interleaved RGB8.

use byteorder::{BigEndian, ByteOrder as Endianness};

use crate::convert::colorspace::yuv_to_rgb;
use crate::convert::Job;
use crate::sample::reduce_to_u8;
use crate::{ByteOrder, ColorCoding};

pub(crate) fn run(job: &Job, src: &[u8], dst: &mut [u8]) {
    match job.source {
        ColorCoding::Rgb8 => dst.copy_from_slice(src),
        ColorCoding::Rgb16 => {
            for (s, d) in src.chunks_exact(2).zip(dst.iter_mut()) {
                *d = reduce_to_u8(BigEndian::read_u16(s), job.bits);
            }
        }
        ColorCoding::Yuv444 => {
            for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
                d.copy_from_slice(&yuv_to_rgb(s[1], s[0], s[2]));
            }
        }
        ColorCoding::Yuv422 => from_yuv422(src, dst, job.order),
        ColorCoding::Yuv411 => {
            for (s, d) in src.chunks_exact(6).zip(dst.chunks_exact_mut(12)) {
                let (u, v) = (s[0], s[3]);
                d[0..3].copy_from_slice(&yuv_to_rgb(s[1], u, v));
                d[3..6].copy_from_slice(&yuv_to_rgb(s[2], u, v));
                d[6..9].copy_from_slice(&yuv_to_rgb(s[4], u, v));
                d[9..12].copy_from_slice(&yuv_to_rgb(s[5], u, v));
            }
        }
        ColorCoding::Mono8 | ColorCoding::Raw8 => {
            for (&y, d) in src.iter().zip(dst.chunks_exact_mut(3)) {
                d.copy_from_slice(&[y, y, y]);
            }
        }
        ColorCoding::Mono16 | ColorCoding::Raw16 => {
            for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(3)) {
                let y = reduce_to_u8(BigEndian::read_u16(s), job.bits);
                d.copy_from_slice(&[y, y, y]);
            }
        }
        _ => {}
    }
}

fn from_yuv422(src: &[u8], dst: &mut [u8], order: ByteOrder) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(6)) {
        let (y0, u, y1, v) = match order {
            ByteOrder::Uyvy => (s[1], s[0], s[3], s[2]),
            ByteOrder::Yuyv => (s[0], s[1], s[2], s[3]),
        };
        d[..3].copy_from_slice(&yuv_to_rgb(y0, u, v));
        d[3..].copy_from_slice(&yuv_to_rgb(y1, u, v));
    }
}
