//! Demosaicing using nearest neighbour interpolation.
//!
//! Each output pixel takes its colours from the 2x2 window whose top-left
//! corner it is. The window holds exactly one red and one blue sample. At a
//! red/blue site green comes from the right neighbour, at a green site from
//! the diagonal one. The last row and column have no window and are zeroed.

use crate::bayer::{Phase, GREEN};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (src.w, src.h);
    dst.clear_last_row_col();

    let mut phase = Phase::new(tile);
    for y in 0..h - 1 {
        // row = colour of the red/blue samples on y, col = those on y + 1.
        let (row, col) = (phase.row_channel(), phase.col_channel());

        for x in 0..w - 1 {
            if phase.is_green(x) {
                dst.put(x, y, row, src.get(x + 1, y));
                dst.put(x, y, GREEN, src.get(x + 1, y + 1));
                dst.put(x, y, col, src.get(x, y + 1));
            } else {
                dst.put(x, y, row, src.get(x, y));
                dst.put(x, y, GREEN, src.get(x + 1, y));
                dst.put(x, y, col, src.get(x + 1, y + 1));
            }
        }

        phase = phase.next_row();
    }
}
