//! Raster views over caller-owned buffers.

use crate::errcode::check_len;
use crate::sample::{clip, Sample};
use crate::{ConvertError, ConvertResult};

/// Read-only single-channel Bayer mosaic.
pub struct Mosaic<'a, T> {
    pub w: usize,
    pub h: usize,
    buf: &'a [T],
}

/// Mutable interleaved RGB raster.
///
/// Every store is clipped into `[0, max]`.
pub struct RasterMut<'a, T> {
    pub w: usize,
    pub h: usize,
    max: i32,
    buf: &'a mut [T],
}

impl<'a, T: Sample> Mosaic<'a, T> {
    /// Wrap a mosaic buffer, which must hold exactly `w * h` samples.
    pub fn new(w: usize, h: usize, buf: &'a [T]) -> ConvertResult<Self> {
        let len = w
            .checked_mul(h)
            .ok_or(ConvertError::InvalidDimensions(w, h))?;
        check_len(len, buf.len())?;
        Ok(Mosaic { w, h, buf })
    }

    /// Sample at `(x, y)`, widened for arithmetic.
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.buf[y * self.w + x].into()
    }
}

impl<'a, T: Sample> RasterMut<'a, T> {
    /// Wrap an RGB buffer, which must hold exactly `3 * w * h` samples.
    pub fn new(w: usize, h: usize, max: i32, buf: &'a mut [T]) -> ConvertResult<Self> {
        let len = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ConvertError::InvalidDimensions(w, h))?;
        check_len(len, buf.len())?;
        Ok(RasterMut { w, h, max, buf })
    }

    /// Store channel `c` of pixel `(x, y)`.
    #[inline(always)]
    pub fn put(&mut self, x: usize, y: usize, c: usize, v: i32) {
        self.buf[3 * (y * self.w + x) + c] = clip(v, self.max);
    }

    /// Channel `c` of pixel `(x, y)`, widened for arithmetic.
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize, c: usize) -> i32 {
        self.buf[3 * (y * self.w + x) + c].into()
    }

    /// Borrow a mutable row slice.
    pub fn borrow_row_mut(&mut self, y: usize) -> &mut [T] {
        let stride = 3 * self.w;
        &mut self.buf[stride * y..stride * (y + 1)]
    }

    /// Zero the whole raster.
    pub fn clear(&mut self) {
        for e in self.buf.iter_mut() {
            *e = T::default();
        }
    }

    /// Zero a frame of `n` pixels around the raster.
    pub fn clear_borders(&mut self, n: usize) {
        let (w, h) = (self.w, self.h);
        let nx = n.min(w);

        for y in 0..h {
            let row = self.borrow_row_mut(y);
            if y < n || y + n >= h {
                row.iter_mut().for_each(|e| *e = T::default());
            } else {
                row[..3 * nx].iter_mut().for_each(|e| *e = T::default());
                row[3 * (w - nx)..].iter_mut().for_each(|e| *e = T::default());
            }
        }
    }

    /// Zero the last row and the last column.
    pub fn clear_last_row_col(&mut self) {
        let (w, h) = (self.w, self.h);

        for y in 0..h {
            let row = self.borrow_row_mut(y);
            if y + 1 == h {
                row.iter_mut().for_each(|e| *e = T::default());
            } else {
                row[3 * (w - 1)..].iter_mut().for_each(|e| *e = T::default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Mosaic, RasterMut};
    use crate::ConvertError;

    #[test]
    fn test_mosaic_size() {
        let buf = [0u8; 12];
        assert!(Mosaic::new(4, 3, &buf[..]).is_ok());
        assert_eq!(
            Mosaic::new(4, 4, &buf[..]).err(),
            Some(ConvertError::BufferSizeMismatch(16, 12))
        );
        assert_eq!(
            Mosaic::new(usize::MAX, 2, &buf[..]).err(),
            Some(ConvertError::InvalidDimensions(usize::MAX, 2))
        );
    }

    #[test]
    fn test_put_clips() {
        let mut buf = [0u16; 3 * 2 * 2];
        let mut dst = RasterMut::new(2, 2, 1023, &mut buf[..]).expect("raster");
        dst.put(1, 1, 2, 5000);
        dst.put(0, 1, 0, -3);
        dst.put(1, 0, 1, 512);
        assert_eq!(dst.get(1, 1, 2), 1023);
        assert_eq!(dst.get(0, 1, 0), 0);
        assert_eq!(dst.get(1, 0, 1), 512);
    }

    #[test]
    fn test_clear_borders() {
        const IMG_W: usize = 5;
        const IMG_H: usize = 5;
        let mut buf = [9u8; 3 * IMG_W * IMG_H];
        {
            let mut dst = RasterMut::new(IMG_W, IMG_H, 255, &mut buf[..]).expect("raster");
            dst.clear_borders(2);
        }

        for y in 0..IMG_H {
            for x in 0..IMG_W {
                let v = buf[3 * (y * IMG_W + x)];
                if x == 2 && y == 2 {
                    assert_eq!(v, 9);
                } else {
                    assert_eq!(v, 0, "pixel ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_clear_last_row_col() {
        let mut buf = [7u8; 3 * 3 * 2];
        {
            let mut dst = RasterMut::new(3, 2, 255, &mut buf[..]).expect("raster");
            dst.clear_last_row_col();
        }

        let expected = [
            7, 7, 7,   7, 7, 7,   0, 0, 0,
            0, 0, 0,   0, 0, 0,   0, 0, 0 ];
        assert_eq!(&buf[..], &expected[..]);
    }
}
