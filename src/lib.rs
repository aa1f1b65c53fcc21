//! This crate provides pixel-format conversion and Bayer demosaicing for
//! IIDC camera frames.
//!
//! Two families of routines are exposed, both operating on caller-owned
//! flat buffers:
//!
//! - the converters [`convert_to_yuv422`], [`convert_to_mono8`] and
//!   [`convert_to_rgb8`] turn packed YUV, RGB and monochrome codings into
//!   one of the three canonical formats;
//! - the demosaicers [`decode_8bit`] and [`decode_16bit`] reconstruct RGB
//!   from a single-channel Bayer mosaic.
//!
//! [`convert_frame`] chooses between the two from a [`Frame`] description.
//! Requests are validated completely before the destination is written.
//! 16-bit samples inside byte buffers are big-endian.

pub use bayer::{read_samples_u16, write_samples_u16, BayerTile};
pub use coding::{ByteOrder, ColorCoding};
pub use convert::{convert_to_mono8, convert_to_rgb8, convert_to_yuv422, deinterlace_stereo};
pub use demosaic::{decode_16bit, decode_8bit, BayerMethod};
pub use errcode::{ConvertError, ConvertResult};
pub use frame::{convert_frame, debayer_frame, deinterlace_stereo_frame, ConvertOptions, Frame, FrameMut};

pub mod convert;
pub mod demosaic;
pub mod ffi;
pub mod sample;

mod bayer;
mod coding;
mod errcode;
mod frame;
mod raster;
