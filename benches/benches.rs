//! Demosaicing and conversion benchmarks.

#![cfg_attr(feature = "bench", feature(test))]

#[cfg(all(feature = "bench", test))]
extern crate test;

#[cfg(all(feature = "bench", test))]
mod bench {
    use pixconv::*;

    const IMG_W: usize = 128;
    const IMG_H: usize = 128;
    const SRC_U8: [u8; IMG_W * IMG_H] = [0u8; IMG_W * IMG_H];
    const SRC_U16: [u16; IMG_W * IMG_H] = [0u16; IMG_W * IMG_H];

    fn bench_u8(b: &mut test::Bencher, method: BayerMethod) {
        let (w, h) = method.output_size(IMG_W, IMG_H);
        let mut dst = vec![0u8; 3 * w * h];
        b.iter(|| decode_8bit(&SRC_U8, &mut dst, IMG_W, IMG_H, BayerTile::RGGB, method));
    }

    fn bench_u16(b: &mut test::Bencher, method: BayerMethod) {
        let (w, h) = method.output_size(IMG_W, IMG_H);
        let mut dst = vec![0u16; 3 * w * h];
        b.iter(|| decode_16bit(&SRC_U16, &mut dst, IMG_W, IMG_H, BayerTile::RGGB, method, 12));
    }

    #[bench]
    fn bench_nearest_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::Nearest);
    }

    #[bench]
    fn bench_nearest_u16(b: &mut test::Bencher) {
        bench_u16(b, BayerMethod::Nearest);
    }

    #[bench]
    fn bench_simple_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::Simple);
    }

    #[bench]
    fn bench_bilinear_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::Bilinear);
    }

    #[bench]
    fn bench_bilinear_u16(b: &mut test::Bencher) {
        bench_u16(b, BayerMethod::Bilinear);
    }

    #[bench]
    fn bench_hqlinear_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::HqLinear);
    }

    #[bench]
    fn bench_hqlinear_u16(b: &mut test::Bencher) {
        bench_u16(b, BayerMethod::HqLinear);
    }

    #[bench]
    fn bench_downsample_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::Downsample);
    }

    #[bench]
    fn bench_edgesense_u8(b: &mut test::Bencher) {
        bench_u8(b, BayerMethod::EdgeSense);
    }

    #[bench]
    fn bench_edgesense_u16(b: &mut test::Bencher) {
        bench_u16(b, BayerMethod::EdgeSense);
    }

    #[bench]
    fn bench_rgb8_to_yuv422(b: &mut test::Bencher) {
        let src = vec![0x80u8; 3 * IMG_W * IMG_H];
        let mut dst = vec![0u8; 2 * IMG_W * IMG_H];
        b.iter(|| {
            convert_to_yuv422(&src, &mut dst, IMG_W, IMG_H, ByteOrder::Uyvy, ColorCoding::Rgb8, 8)
        });
    }

    #[bench]
    fn bench_yuv422_to_rgb8(b: &mut test::Bencher) {
        let src = vec![0x80u8; 2 * IMG_W * IMG_H];
        let mut dst = vec![0u8; 3 * IMG_W * IMG_H];
        b.iter(|| {
            convert_to_rgb8(&src, &mut dst, IMG_W, IMG_H, ByteOrder::Uyvy, ColorCoding::Yuv422, 8)
        });
    }
}
