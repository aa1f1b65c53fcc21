//! Demosaicing by downsampling.
//!
//! Each 2x2 tile of the mosaic becomes one output pixel: red and blue are
//! taken as sampled, green is the mean of the two green samples (truncated).
//! The output raster is half the mosaic in each dimension.

use crate::bayer::{BLUE, GREEN, RED};
use crate::raster::{Mosaic, RasterMut};
use crate::sample::Sample;
use crate::BayerTile;

pub fn run<T: Sample>(src: &Mosaic<T>, dst: &mut RasterMut<T>, tile: BayerTile) {
    for ty in 0..dst.h {
        for tx in 0..dst.w {
            let (x0, y0) = (2 * tx, 2 * ty);
            let mut rgb = [0i32; 3];

            for y in y0..y0 + 2 {
                for x in x0..x0 + 2 {
                    rgb[tile.color_at(x, y)] += src.get(x, y);
                }
            }

            dst.put(tx, ty, RED, rgb[RED]);
            dst.put(tx, ty, GREEN, rgb[GREEN] >> 1);
            dst.put(tx, ty, BLUE, rgb[BLUE]);
        }
    }
}
