//! Domain-critical property tests for the codec core.
//!
//! Each test pins one behavior of the format contract: quantization
//! idempotence, palette determinism and uniqueness, the run-length row
//! law, and the documented lossy edges. These complement the per-module
//! unit tests by exercising the components together.

#[cfg(test)]
mod domain_tests {
    use std::collections::{HashMap, HashSet};

    use crate::api::MotifCodec;
    use crate::color::Rgb;
    use crate::motif::Motif;
    use crate::output::EncodedImage;
    use crate::palette::Palette;
    use crate::quantize::quantize;
    use crate::row::{decode_row, encode_row, group_row, Token};

    /// Deterministic multi-color test raster.
    fn test_raster(width: usize, height: usize) -> Vec<Rgb> {
        (0..width * height)
            .map(|i| {
                Rgb::new(
                    (i * 53 % 256) as u8,
                    (i * 101 % 256) as u8,
                    (i * 29 % 256) as u8,
                )
            })
            .collect()
    }

    #[test]
    fn test_quantization_is_idempotent() {
        for step in [1u16, 2, 3, 4, 7, 37, 64, 86, 128, 255, 256] {
            for v in 0..=255u8 {
                let color = Rgb::new(v, v.wrapping_mul(3), v.wrapping_add(91));
                let once = quantize(color, step);
                assert_eq!(
                    quantize(once, step),
                    once,
                    "step {step}, input {color:?} quantized to {once:?}"
                );
            }
        }
    }

    #[test]
    fn test_palette_has_no_duplicate_motifs() {
        for pixels_per_motif in 1..=3 {
            let pixels = test_raster(16, 8);
            let palette = Palette::build(&pixels, 32, pixels_per_motif).unwrap();
            let distinct: HashSet<_> = palette.motifs().iter().collect();
            assert_eq!(
                distinct.len(),
                palette.len(),
                "k={pixels_per_motif} produced duplicate motifs"
            );
        }
    }

    #[test]
    fn test_palette_order_is_sorted_and_reproducible() {
        let pixels = test_raster(24, 9);
        let first = Palette::build(&pixels, 48, 2).unwrap();
        let second = Palette::build(&pixels, 48, 2).unwrap();
        assert_eq!(first.motifs(), second.motifs());

        // Lexicographically strictly increasing: sorted AND duplicate-free.
        for pair in first.motifs().windows(2) {
            assert!(
                pair[0].colors() < pair[1].colors(),
                "palette order must be strictly increasing, got {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_every_emitted_token_indexes_into_palette() {
        let codec = MotifCodec::new(32, 2).unwrap();
        let pixels = test_raster(10, 6);
        let encoded = codec.encode(&pixels, 10, 6).unwrap();
        for row in encoded.rows() {
            for token in row.tokens() {
                assert!(
                    token.index() < encoded.palette().len(),
                    "token {token:?} out of range for palette of {}",
                    encoded.palette().len()
                );
            }
        }
    }

    #[test]
    fn test_row_round_trip_is_exact() {
        let pixels = test_raster(12, 5);
        let palette = Palette::build(&pixels, 16, 3).unwrap();
        let mut memo = HashMap::new();
        for y in 0..5 {
            let row = &pixels[y * 12..(y + 1) * 12];
            let motifs = group_row(row, 16, 3, &mut memo);
            let encoded = encode_row(&motifs, &palette).unwrap();
            let decoded = decode_row(&encoded, &palette).unwrap();
            assert_eq!(decoded, motifs, "row {y}");
        }
    }

    #[test]
    fn test_run_lengths_are_maximal() {
        let a = Motif::new(&[Rgb::new(0, 0, 0)]);
        let b = Motif::new(&[Rgb::new(255, 255, 255)]);
        let palette = Palette::from_motifs(vec![a, b]).unwrap();

        // Five identical motifs then one different: exactly two tokens,
        // and no run token for the run of one.
        let row = [a, a, a, a, a, b];
        let encoded = encode_row(&row, &palette).unwrap();
        assert_eq!(
            encoded.tokens(),
            &[
                Token::Run { index: 0, length: 5 },
                Token::Single { index: 1 },
            ]
        );
    }

    #[test]
    fn test_step_one_palette_is_the_raw_color_set() {
        let pixels = test_raster(8, 8);
        let palette = Palette::build(&pixels, 1, 1).unwrap();

        let mut distinct: Vec<Rgb> = pixels
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        distinct.sort_unstable();
        let expected: Vec<Motif> = distinct.iter().map(|&c| Motif::new(&[c])).collect();

        assert_eq!(palette.motifs(), expected.as_slice());
    }

    #[test]
    fn test_step_256_collapses_to_extremes() {
        let pixels = test_raster(16, 4);
        let palette = Palette::build(&pixels, 256, 1).unwrap();
        for motif in palette.motifs() {
            for color in motif.colors() {
                for channel in color.to_bytes() {
                    assert!(
                        channel == 0 || channel == 255,
                        "step 256 left channel value {channel}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_trailing_pixels_are_dropped() {
        // Width 5 at k=2: two motifs (4 pixels) per row survive.
        let codec = MotifCodec::new(1, 2).unwrap();
        let pixels = test_raster(5, 3);
        let encoded = codec.encode(&pixels, 5, 3).unwrap();
        let raster = encoded.decode().unwrap();

        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        // Step 1 is the identity, so the kept pixels survive untouched.
        for y in 0..3 {
            assert_eq!(raster.row(y), &pixels[y * 5..y * 5 + 4], "row {y}");
        }
    }

    #[test]
    fn test_two_pixel_collapse_scenario() {
        // (11,11,11) and (12,12,12) land on the same step-4 grid point,
        // so the palette has a single entry and the row a single run.
        let codec = MotifCodec::new(4, 1).unwrap();
        let pixels = [Rgb::new(11, 11, 11), Rgb::new(12, 12, 12)];
        let encoded = codec.encode(&pixels, 2, 1).unwrap();

        assert_eq!(
            encoded.palette().motifs(),
            &[Motif::new(&[Rgb::new(12, 12, 12)])]
        );
        assert_eq!(encoded.rows().len(), 1);
        assert_eq!(
            encoded.rows()[0].tokens(),
            &[Token::Run { index: 0, length: 2 }]
        );

        let raster = encoded.decode().unwrap();
        assert_eq!(
            raster.pixels(),
            &[Rgb::new(12, 12, 12), Rgb::new(12, 12, 12)]
        );
    }

    #[test]
    fn test_full_pipeline_through_tables() {
        let codec = MotifCodec::new(32, 2).unwrap();
        let pixels = test_raster(14, 7);
        let encoded = codec.encode(&pixels, 14, 7).unwrap();

        let reparsed =
            EncodedImage::from_tables(&encoded.palette_table(), &encoded.row_table()).unwrap();
        assert_eq!(reparsed.palette().motifs(), encoded.palette().motifs());
        assert_eq!(reparsed.rows(), encoded.rows());

        // Every decoded pixel is exactly the quantized original.
        let raster = reparsed.decode().unwrap();
        assert_eq!(raster.width(), 14);
        assert_eq!(raster.height(), 7);
        for y in 0..7 {
            for x in 0..14 {
                assert_eq!(
                    raster.row(y)[x],
                    quantize(pixels[y * 14 + x], 32),
                    "pixel ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn test_serialized_tables_are_byte_stable() {
        let codec = MotifCodec::new(16, 3).unwrap();
        let pixels = test_raster(9, 9);
        let first = codec.encode(&pixels, 9, 9).unwrap();
        let second = codec.encode(&pixels, 9, 9).unwrap();
        assert_eq!(first.palette_table(), second.palette_table());
        assert_eq!(first.row_table(), second.row_table());
    }
}
