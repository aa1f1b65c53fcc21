//! Conversion error codes.

use quick_error::quick_error;

use crate::ColorCoding;

pub type ConvertResult<T> = Result<T, ConvertError>;

quick_error! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum ConvertError {
        UnsupportedConversion(from: ColorCoding, to: ColorCoding) {
            display("Unsupported conversion from {:?} to {:?}", from, to)
        }
        InvalidByteOrder(raw: u32) {
            display("Invalid byte order {}", raw)
        }
        InvalidParameter(what: &'static str) {
            display("Invalid parameter: {}", what)
        }
        InvalidDimensions(width: usize, height: usize) {
            display("Invalid dimensions {}x{}", width, height)
        }
        BufferSizeMismatch(expected: usize, received: usize) {
            display("Buffer size mismatch: expected={}, received={}", expected, received)
        }
    }
}

impl ConvertError {
    /// Stable negative code reported through the C interface.
    pub fn code(&self) -> i32 {
        match *self {
            ConvertError::UnsupportedConversion(..) => -1,
            ConvertError::InvalidByteOrder(_) => -2,
            ConvertError::InvalidParameter(_) => -3,
            ConvertError::InvalidDimensions(..) => -4,
            ConvertError::BufferSizeMismatch(..) => -5,
        }
    }
}

/// Fail with `BufferSizeMismatch` unless a buffer holds exactly `expected` elements.
#[inline]
pub(crate) fn check_len(expected: usize, received: usize) -> ConvertResult<()> {
    if expected != received {
        return Err(ConvertError::BufferSizeMismatch(expected, received));
    }
    Ok(())
}
