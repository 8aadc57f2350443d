//! Integration tests for the ips crates.
//!
//! End-to-end checks that span ips-core, ips-lut, ips-ops and ips-io:
//! border replication, identity parameters, saturation, gamma
//! round-trips, median behavior, determinism, gradient behavior on flat
//! input, dimension preservation, and file round-trips.

#[cfg(test)]
mod tests {
    use ips_core::{BgrImage, Channel, Histogram};
    use ips_lut::Lut8;
    use ips_ops::kernel::Kernel3;
    use ips_ops::{filter, pixelwise, FilterOp, OpsError, Pipeline, PixelOp};
    use tempfile::tempdir;

    /// Deterministic textured image.
    fn texture(w: u32, h: u32) -> BgrImage {
        BgrImage::from_fn(w, h, |x, y| {
            let a = x.wrapping_mul(2654435761) ^ y.wrapping_mul(40503);
            [(a >> 5) as u8, (a >> 13) as u8, (x * 19 + y * 23) as u8]
        })
    }

    /// Every pixel value 0..=255 on all channels.
    fn all_levels() -> BgrImage {
        BgrImage::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            [v, v, v]
        })
    }

    fn all_mappers() -> Vec<PixelOp> {
        vec![
            PixelOp::ToneScale { coeff: 2.0 },
            PixelOp::Linear { a: 1.0, b: 50.0 },
            PixelOp::Negative,
            PixelOp::Gamma { gamma: 0.7 },
            PixelOp::Sigmoid { k: 1.0, x0: 0.5 },
            PixelOp::HistEqualization,
        ]
    }

    /// Filter output at (x, y) computed from explicitly clamped neighbors.
    fn clamped_neighborhood(img: &BgrImage, x: u32, y: u32) -> [[[u8; 3]; 3]; 3] {
        let (w, h) = img.dimensions();
        let mut win = [[[0u8; 3]; 3]; 3];
        for (r, dy) in (-1i64..=1).enumerate() {
            for (c, dx) in (-1i64..=1).enumerate() {
                let sx = (x as i64 + dx).max(0).min(w as i64 - 1) as u32;
                let sy = (y as i64 + dy).max(0).min(h as i64 - 1) as u32;
                win[r][c] = img.pixel(sx, sy);
            }
        }
        win
    }

    #[test]
    fn test_border_replication_all_filters() {
        let img = texture(5, 4);
        let (w, h) = img.dimensions();
        let border: Vec<(u32, u32)> = img
            .pixels()
            .map(|(x, y, _)| (x, y))
            .filter(|&(x, y)| x == 0 || y == 0 || x == w - 1 || y == h - 1)
            .collect();

        let convolutions = [
            (FilterOp::WeightedAverage, Kernel3::WEIGHTED_AVERAGE),
            (FilterOp::Sharpen, Kernel3::SHARPEN),
            (FilterOp::Emboss, Kernel3::EMBOSS),
        ];
        for (op, kernel) in convolutions {
            let out = op.apply(&img).unwrap();
            for &(x, y) in &border {
                let win = clamped_neighborhood(&img, x, y);
                assert_eq!(out.pixel(x, y), kernel.evaluate_pixel(&win), "{op} at ({x},{y})");
            }
        }

        let gradients = [
            (FilterOp::EdgeDetect, Kernel3::EDGE_X, Kernel3::EDGE_Y),
            (FilterOp::Sobel, Kernel3::SOBEL_X, Kernel3::SOBEL_Y),
            (FilterOp::Prewitt, Kernel3::PREWITT_X, Kernel3::PREWITT_Y),
            (FilterOp::Roberts, Kernel3::ROBERTS_X, Kernel3::ROBERTS_Y),
        ];
        for (op, kx, ky) in gradients {
            let out = op.apply(&img).unwrap();
            for &(x, y) in &border {
                let win = clamped_neighborhood(&img, x, y);
                for c in 0..3 {
                    let gx = kx.response(&win, c) as f64;
                    let gy = ky.response(&win, c) as f64;
                    let expected = (gx * gx + gy * gy).sqrt().clamp(0.0, 255.0) as u8;
                    assert_eq!(out.pixel(x, y)[c], expected, "{op} at ({x},{y}) ch {c}");
                }
            }
        }

        let out = filter::median(&img).unwrap();
        for &(x, y) in &border {
            let win = clamped_neighborhood(&img, x, y);
            for c in 0..3 {
                let mut taps: Vec<u8> = win.iter().flatten().map(|px| px[c]).collect();
                taps.sort();
                assert_eq!(out.pixel(x, y)[c], taps[4]);
            }
        }

        // Radius 1 box: same 3x3 clamped window, uniform weights
        let out = filter::box_smooth(&img, 1).unwrap();
        for &(x, y) in &border {
            let win = clamped_neighborhood(&img, x, y);
            for c in 0..3 {
                let sum: i32 = win.iter().flatten().map(|px| px[c] as i32).sum();
                assert_eq!(out.pixel(x, y)[c], (sum / 9) as u8);
            }
        }
    }

    #[test]
    fn test_identity_parameters() {
        let img = all_levels();
        assert_eq!(pixelwise::linear(&img, 1.0, 0.0).unwrap(), img);
        assert_eq!(pixelwise::tone_scale(&img, 1.0).unwrap(), img);

        let flat = BgrImage::filled(7, 5, [12, 130, 251]);
        assert_eq!(filter::sharpen(&flat).unwrap(), flat);
        assert_eq!(filter::box_smooth(&texture(6, 6), 0).unwrap(), texture(6, 6));
    }

    #[test]
    fn test_saturation() {
        let img = texture(9, 9);
        let results = [
            pixelwise::tone_scale(&img, 100.0).unwrap(),
            pixelwise::linear(&img, 10.0, 0.0).unwrap(),
            pixelwise::linear(&img, -10.0, 0.0).unwrap(),
            pixelwise::linear(&img, 1.0, 1e9).unwrap(),
        ];
        // Bright results never wrap back to small values
        for (o, &i) in results[0].data().iter().zip(img.data()) {
            assert_eq!(*o, if i == 0 { 0 } else { 255 });
        }
        for (o, &i) in results[1].data().iter().zip(img.data()) {
            assert_eq!(*o as u32, (i as u32 * 10).min(255));
        }
        assert!(results[2].data().iter().all(|&v| v == 0));
        assert!(results[3].data().iter().all(|&v| v == 255));

        let sharp = filter::sharpen(&texture(9, 9)).unwrap();
        assert_eq!(sharp.dimensions(), (9, 9));
    }

    #[test]
    fn test_gamma_round_trip() {
        let img = all_levels();
        for g in [0.5, 0.7, 0.8, 1.25] {
            let fwd = pixelwise::gamma(&img, g).unwrap();
            let back = pixelwise::gamma(&fwd, 1.0 / g).unwrap();
            for (a, b) in back.data().iter().zip(img.data()) {
                assert!((*a as i32 - *b as i32).abs() <= 1, "gamma {g}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_median_constant_and_outlier() {
        let flat = BgrImage::filled(3, 3, [42, 42, 42]);
        assert_eq!(filter::median(&flat).unwrap().pixel(1, 1), [42, 42, 42]);

        let mut spike = flat.clone();
        spike.set_pixel(1, 1, [255, 0, 255]);
        assert_eq!(filter::median(&spike).unwrap().pixel(1, 1), [42, 42, 42]);
    }

    #[test]
    fn test_equalization_determinism() {
        let img = texture(31, 17);
        let first = pixelwise::equalize_histogram(&img).unwrap();
        for _ in 0..5 {
            assert_eq!(pixelwise::equalize_histogram(&img).unwrap().data(), first.data());
        }
        // Same result as building the table by hand from the blue channel
        let lut = Lut8::equalization(&Histogram::from_channel(&img, Channel::Blue)).unwrap();
        assert_eq!(pixelwise::apply_lut(&img, &lut).unwrap(), first);
    }

    #[test]
    fn test_gradients_on_uniform_image() {
        for v in [0u8, 77, 255] {
            let img = BgrImage::filled(11, 6, [v, 255 - v, v / 2]);
            for op in [FilterOp::EdgeDetect, FilterOp::Sobel, FilterOp::Prewitt, FilterOp::Roberts] {
                let out = op.apply(&img).unwrap();
                assert!(out.data().iter().all(|&s| s == 0), "{op} on {v}");
            }
        }
    }

    #[test]
    fn test_dimension_preservation() {
        for (w, h) in [(1, 1), (2, 1), (1, 3), (17, 9), (128, 96)] {
            let img = texture(w, h);
            for op in all_mappers() {
                assert_eq!(op.apply(&img).unwrap().dimensions(), (w, h), "{op}");
            }
            for op in FilterOp::all(2) {
                assert_eq!(op.apply(&img).unwrap().dimensions(), (w, h), "{op}");
            }
        }
    }

    #[test]
    fn test_zero_area_policy() {
        let empty = BgrImage::new(0, 4);
        for op in all_mappers() {
            let res = op.apply(&empty);
            if op == PixelOp::HistEqualization {
                assert!(matches!(res, Err(OpsError::InvalidDimensions(_))));
            } else {
                assert_eq!(res.unwrap().dimensions(), (0, 4));
            }
        }
        for op in FilterOp::all(3) {
            assert!(op.apply(&empty).unwrap().is_empty());
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let img = texture(4, 4);
        assert!(matches!(pixelwise::gamma(&img, 0.0), Err(OpsError::InvalidParameter(_))));
        assert!(matches!(pixelwise::gamma(&img, -2.0), Err(OpsError::InvalidParameter(_))));
        assert!(matches!(filter::box_smooth(&img, -3), Err(OpsError::InvalidParameter(_))));
    }

    #[test]
    fn test_input_never_mutated() {
        let img = texture(12, 12);
        let snapshot = img.clone();
        for op in all_mappers() {
            let _ = op.apply(&img).unwrap();
        }
        for op in FilterOp::all(2) {
            let _ = op.apply(&img).unwrap();
        }
        assert_eq!(img, snapshot);
    }

    #[test]
    fn test_pipeline_file_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        let img = texture(40, 30);
        ips_io::write(&input, &img).expect("Failed to write BMP");

        let loaded = ips_io::read(&input).expect("Failed to read BMP");
        assert_eq!(loaded, img);

        let pipeline = Pipeline::new()
            .with_mapper(PixelOp::Gamma { gamma: 0.7 })
            .with_filter(FilterOp::BoxSmooth { radius: 2 });
        let out = pipeline.run(&loaded).unwrap();

        let output = dir.path().join(format!("outimg_{}.png", pipeline.label()));
        ips_io::write(&output, &out).expect("Failed to write PNG");
        assert_eq!(ips_io::read(&output).unwrap(), out);
        assert!(output.ends_with("outimg_EqualizationFilter.png"));
    }
}
