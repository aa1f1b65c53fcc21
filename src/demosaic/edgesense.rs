//! Demosaicing using edge-sensing interpolation.
//!
//! The raster is built in passes, each reading the output of the previous:
//!
//! 1. every sample is scattered to its own channel;
//! 2. green is estimated at each red/blue site along the direction with the
//!    smaller second difference of that site's own colour, or from all four
//!    neighbours when both directions are equally smooth;
//! 3. red, then blue, is filled in from green plus the mean colour
//!    difference of the nearest samples of that colour.
//!
//! The 3 pixel border is zeroed.

use std::cmp::Ordering;

use crate::bayer::{Phase, BLUE, GREEN, RED};
use crate::demosaic::none;
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

const PADDING: usize = 3;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    none::run(src, dst, tile);
    interpolate_green(dst, tile);
    interpolate_colour(dst, tile, RED);
    interpolate_colour(dst, tile, BLUE);
    dst.clear_borders(PADDING);
}

fn interpolate_green<T: Sample>(dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (dst.w, dst.h);

    for y in 2..h.saturating_sub(2) {
        let phase = Phase::at_row(tile, y);
        let c = phase.row_channel();

        for x in 2..w.saturating_sub(2) {
            if phase.is_green(x) {
                continue;
            }

            let s = dst.get(x, y, c);
            let dh = (((dst.get(x - 2, y, c) + dst.get(x + 2, y, c)) >> 1) - s).abs();
            let dv = (((dst.get(x, y - 2, c) + dst.get(x, y + 2, c)) >> 1) - s).abs();

            let (l, r) = (dst.get(x - 1, y, GREEN), dst.get(x + 1, y, GREEN));
            let (u, d) = (dst.get(x, y - 1, GREEN), dst.get(x, y + 1, GREEN));

            let g = match dh.cmp(&dv) {
                Ordering::Less => (l + r) >> 1,
                Ordering::Greater => (u + d) >> 1,
                Ordering::Equal => (l + r + u + d) >> 2,
            };
            dst.put(x, y, GREEN, g);
        }
    }
}

/// Fill channel `c` wherever the mosaic did not sample it.
fn interpolate_colour<T: Sample>(dst: &mut RasterMut<T>, tile: BayerTile, c: usize) {
    let (w, h) = (dst.w, dst.h);

    for y in 1..h.saturating_sub(1) {
        let phase = Phase::at_row(tile, y);

        for x in 1..w.saturating_sub(1) {
            let g = dst.get(x, y, GREEN);
            let v = if phase.is_green(x) {
                if phase.row_channel() == c {
                    g + ((diff(dst, x - 1, y, c) + diff(dst, x + 1, y, c)) >> 1)
                } else {
                    g + ((diff(dst, x, y - 1, c) + diff(dst, x, y + 1, c)) >> 1)
                }
            } else if phase.row_channel() != c {
                g + ((diff(dst, x - 1, y - 1, c)
                    + diff(dst, x + 1, y - 1, c)
                    + diff(dst, x - 1, y + 1, c)
                    + diff(dst, x + 1, y + 1, c))
                    >> 2)
            } else {
                continue;
            };
            dst.put(x, y, c, v);
        }
    }
}

/// Colour difference `c - green` at `(x, y)`.
#[inline(always)]
fn diff<T: Sample>(dst: &RasterMut<T>, x: usize, y: usize, c: usize) -> i32 {
    dst.get(x, y, c) - dst.get(x, y, GREEN)
}
