//! Conversions to MONO8.

use byteorder::{BigEndian, ByteOrder as Endianness};

use crate::convert::Job;
use crate::sample::reduce_to_u8;
use crate::ColorCoding;

pub(crate) fn run(job: &Job, src: &[u8], dst: &mut [u8]) {
    match job.source {
        ColorCoding::Mono8 | ColorCoding::Raw8 => dst.copy_from_slice(src),
        ColorCoding::Mono16 | ColorCoding::Raw16 => {
            for (s, d) in src.chunks_exact(2).zip(dst.iter_mut()) {
                *d = reduce_to_u8(BigEndian::read_u16(s), job.bits);
            }
        }
        _ => {}
    }
}
