//! Demosaicing using high-quality linear interpolation.
//!
//! Gradient-corrected bilinear interpolation after Malvar, He and Cutler,
//! "High-quality linear interpolation for demosaicing of Bayer-patterned
//! color images", ICASSP 2004. All kernels are scaled by 8.
//!
//! ```text
//!   green_at_red/blue = (1 / 8) *
//!       [  0  0 -1  0  0
//!       ;  0  0  2  0  0
//!       ; -1  2  4  2 -1
//!       ;  0  0  2  0  0
//!       ;  0  0 -1  0  0 ];
//!
//!   row_colour_at_green = (1 / 8) *
//!       [  0    0  1/2  0    0
//!       ;  0   -1   0  -1    0
//!       ; -1    4   5   4   -1
//!       ;  0   -1   0  -1    0
//!       ;  0    0  1/2  0    0 ];
//!
//!   blue/red_at_red/blue = (1 / 8) *
//!       [  0    0  -3/2  0    0
//!       ;  0    2   0    2    0
//!       ; -3/2  0   6    0  -3/2
//!       ;  0    2   0    2    0
//!       ;  0    0  -3/2  0    0 ];
//! ```
//!
//! The column colour at green is the row colour kernel transposed. The 2
//! pixel border is zeroed.

use crate::bayer::{Phase, GREEN};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

const PADDING: usize = 2;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (src.w, src.h);
    dst.clear_borders(PADDING);
    if w <= 2 * PADDING || h <= 2 * PADDING {
        return;
    }

    for y in PADDING..h - PADDING {
        let phase = Phase::at_row(tile, y);
        let (row, col) = (phase.row_channel(), phase.col_channel());

        for x in PADDING..w - PADDING {
            let c = src.get(x, y);
            let diag = src.get(x - 1, y - 1)
                + src.get(x + 1, y - 1)
                + src.get(x - 1, y + 1)
                + src.get(x + 1, y + 1);

            if phase.is_green(x) {
                let vt = c * 5 + ((src.get(x, y - 1) + src.get(x, y + 1)) << 2)
                    - src.get(x, y - 2)
                    - src.get(x, y + 2)
                    - diag
                    + ((src.get(x - 2, y) + src.get(x + 2, y) + 1) >> 1);
                let hz = c * 5 + ((src.get(x - 1, y) + src.get(x + 1, y)) << 2)
                    - src.get(x - 2, y)
                    - src.get(x + 2, y)
                    - diag
                    + ((src.get(x, y - 2) + src.get(x, y + 2) + 1) >> 1);

                dst.put(x, y, row, (hz + 4) >> 3);
                dst.put(x, y, GREEN, c);
                dst.put(x, y, col, (vt + 4) >> 3);
            } else {
                let far = src.get(x, y - 2) + src.get(x - 2, y) + src.get(x + 2, y) + src.get(x, y + 2);
                let near = src.get(x, y - 1) + src.get(x - 1, y) + src.get(x + 1, y) + src.get(x, y + 1);

                let d = (diag << 1) - ((far * 3 + 1) >> 1) + c * 6;
                let g = (near << 1) - far + (c << 2);

                dst.put(x, y, row, c);
                dst.put(x, y, GREEN, (g + 4) >> 3);
                dst.put(x, y, col, (d + 4) >> 3);
            }
        }
    }
}
