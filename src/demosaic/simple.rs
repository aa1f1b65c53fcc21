//! Demosaicing using the simple (AVT) method.
//!
//! Same 2x2 window as nearest neighbour, but green is the rounded mean of
//! the two green samples of the window.

use crate::bayer::{Phase, GREEN};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (src.w, src.h);
    dst.clear_last_row_col();

    let mut phase = Phase::new(tile);
    for y in 0..h - 1 {
        let (row, col) = (phase.row_channel(), phase.col_channel());

        for x in 0..w - 1 {
            if phase.is_green(x) {
                let g = (src.get(x, y) + src.get(x + 1, y + 1) + 1) >> 1;
                dst.put(x, y, row, src.get(x + 1, y));
                dst.put(x, y, GREEN, g);
                dst.put(x, y, col, src.get(x, y + 1));
            } else {
                let g = (src.get(x + 1, y) + src.get(x, y + 1) + 1) >> 1;
                dst.put(x, y, row, src.get(x, y));
                dst.put(x, y, GREEN, g);
                dst.put(x, y, col, src.get(x + 1, y + 1));
            }
        }

        phase = phase.next_row();
    }
}
