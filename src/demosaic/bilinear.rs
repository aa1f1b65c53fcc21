//! Demosaicing using bilinear interpolation.
//!
//! ```text
//!   green_kernel = (1 / 4) *
//!       [ 0 1 0
//!       ; 1 4 1
//!       ; 0 1 0 ];
//!
//!   red/blue_kernel = (1 / 4) *
//!       [ 1 2 1
//!       ; 2 4 2
//!       ; 1 2 1 ];
//! ```
//!
//! All means are rounded. The 1 pixel border is zeroed.

use crate::bayer::{Phase, GREEN};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

const PADDING: usize = 1;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (src.w, src.h);
    dst.clear_borders(PADDING);

    for y in PADDING..h - PADDING {
        let phase = Phase::at_row(tile, y);
        let (row, col) = (phase.row_channel(), phase.col_channel());

        for x in PADDING..w - PADDING {
            let c = src.get(x, y);
            if phase.is_green(x) {
                // horizontal = row colour, vertical = column colour.
                let hz = (src.get(x - 1, y) + src.get(x + 1, y) + 1) >> 1;
                let vt = (src.get(x, y - 1) + src.get(x, y + 1) + 1) >> 1;
                dst.put(x, y, row, hz);
                dst.put(x, y, GREEN, c);
                dst.put(x, y, col, vt);
            } else {
                // orthogonal = green, diagonal = column colour.
                let g = (src.get(x - 1, y)
                    + src.get(x + 1, y)
                    + src.get(x, y - 1)
                    + src.get(x, y + 1)
                    + 2)
                    >> 2;
                let d = (src.get(x - 1, y - 1)
                    + src.get(x + 1, y - 1)
                    + src.get(x - 1, y + 1)
                    + src.get(x + 1, y + 1)
                    + 2)
                    >> 2;
                dst.put(x, y, row, c);
                dst.put(x, y, GREEN, g);
                dst.put(x, y, col, d);
            }
        }
    }
}
