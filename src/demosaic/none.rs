//! Scatter of the mosaic without any interpolation.
//!
//! Every sample is stored in its own channel and the other two channels are
//! zeroed. Multi-pass demosaicers start from this raster.

use crate::bayer::{Phase, GREEN};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    let (w, h) = (src.w, src.h);
    dst.clear();

    let mut phase = Phase::new(tile);
    for y in 0..h {
        let row = phase.row_channel();
        for x in 0..w {
            let c = if phase.is_green(x) { GREEN } else { row };
            dst.put(x, y, c, src.get(x, y));
        }
        phase = phase.next_row();
    }
}
