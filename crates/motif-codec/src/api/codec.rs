//! MotifCodec: the primary ergonomic entry point for the crate.

use std::collections::HashMap;

use super::error::CodecError;
use crate::color::Rgb;
use crate::output::EncodedImage;
use crate::palette::{validate_arity, validate_step, Palette, PaletteError};
use crate::row::{encode_row, group_row};

/// Lossy motif-palette codec configuration.
///
/// The constructor validates the configuration so no invalid codec can
/// exist; [`encode()`](Self::encode) takes `&self`, so one codec is
/// reusable across rasters.
///
/// Encoding builds the palette over the whole raster first (a
/// synchronization barrier: no index exists before every distinct color
/// has been seen), then encodes rows in order against the frozen palette.
///
/// # Example
///
/// ```
/// use motif_codec::{MotifCodec, Rgb};
///
/// let codec = MotifCodec::new(64, 1).unwrap();
///
/// // Two mid-greys collapse onto one grid point at step 64.
/// let pixels = vec![Rgb::new(100, 100, 100), Rgb::new(110, 110, 110)];
/// let encoded = codec.encode(&pixels, 2, 1).unwrap();
///
/// assert_eq!(encoded.palette().len(), 1);
/// let restored = encoded.decode().unwrap();
/// assert_eq!(restored.pixels(), &[Rgb::new(128, 128, 128); 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MotifCodec {
    step: u16,
    pixels_per_motif: usize,
}

impl MotifCodec {
    /// Create a codec with the given quantization step and motif arity.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidQuantizationStep`] for a step
    /// outside `[1, 256]` and [`PaletteError::InvalidMotifArity`] for an
    /// arity outside `{1, 2, 3}`.
    pub fn new(step: u16, pixels_per_motif: usize) -> Result<Self, PaletteError> {
        validate_step(step)?;
        validate_arity(pixels_per_motif)?;
        Ok(Self {
            step,
            pixels_per_motif,
        })
    }

    /// The configured quantization step.
    #[inline]
    pub fn quantization_step(&self) -> u16 {
        self.step
    }

    /// The configured pixels per motif.
    #[inline]
    pub fn pixels_per_motif(&self) -> usize {
        self.pixels_per_motif
    }

    /// Encode a row-major raster into a palette and run-length rows.
    ///
    /// `pixels` must hold `width * height` entries. Rows narrower than
    /// one motif encode as empty rows; trailing pixels that do not fill a
    /// complete motif are dropped (see
    /// [`group_row`](crate::row::group_row)).
    ///
    /// Either a complete, internally consistent [`EncodedImage`] is
    /// returned or an error; there is no partial output.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn encode(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<EncodedImage, CodecError> {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );

        let palette = Palette::build(pixels, self.step, self.pixels_per_motif)?;

        // One quantization memo for the whole encode; rows share colors
        // far more often than not.
        let mut memo: HashMap<Rgb, Rgb> = HashMap::new();
        let mut rows = Vec::with_capacity(height);
        for y in 0..height {
            let row = &pixels[y * width..(y + 1) * width];
            let motifs = group_row(row, self.step, self.pixels_per_motif, &mut memo);
            rows.push(encode_row(&motifs, &palette)?);
        }

        Ok(EncodedImage::new(palette, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Token;

    fn rgb(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    #[test]
    fn test_new_validates_step() {
        assert!(MotifCodec::new(1, 1).is_ok());
        assert!(MotifCodec::new(256, 3).is_ok());
        assert!(matches!(
            MotifCodec::new(0, 1),
            Err(PaletteError::InvalidQuantizationStep { step: 0 })
        ));
        assert!(matches!(
            MotifCodec::new(300, 1),
            Err(PaletteError::InvalidQuantizationStep { step: 300 })
        ));
    }

    #[test]
    fn test_new_validates_arity() {
        assert!(matches!(
            MotifCodec::new(64, 0),
            Err(PaletteError::InvalidMotifArity { arity: 0 })
        ));
        assert!(matches!(
            MotifCodec::new(64, 4),
            Err(PaletteError::InvalidMotifArity { arity: 4 })
        ));
    }

    #[test]
    fn test_encode_produces_row_per_raster_row() {
        let codec = MotifCodec::new(1, 1).unwrap();
        let pixels = vec![rgb(1), rgb(1), rgb(2), rgb(2), rgb(3), rgb(3)];
        let encoded = codec.encode(&pixels, 2, 3).unwrap();
        assert_eq!(encoded.rows().len(), 3);
        assert_eq!(
            encoded.rows()[2].tokens(),
            &[Token::Run {
                index: encoded.palette().index_of(&crate::Motif::new(&[rgb(3)])).unwrap(),
                length: 2
            }]
        );
    }

    #[test]
    fn test_encode_is_reusable_and_deterministic() {
        let codec = MotifCodec::new(32, 2).unwrap();
        let pixels: Vec<Rgb> = (0..32)
            .map(|i| Rgb::new((i * 17 % 256) as u8, (i * 5 % 256) as u8, (i * 91 % 256) as u8))
            .collect();
        let a = codec.encode(&pixels, 8, 4).unwrap();
        let b = codec.encode(&pixels, 8, 4).unwrap();
        assert_eq!(a.palette().motifs(), b.palette().motifs());
        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn test_encode_empty_raster() {
        let codec = MotifCodec::new(64, 2).unwrap();
        let encoded = codec.encode(&[], 0, 0).unwrap();
        assert!(encoded.palette().is_empty());
        assert!(encoded.rows().is_empty());
    }

    #[test]
    fn test_encode_narrower_than_motif() {
        let codec = MotifCodec::new(1, 3).unwrap();
        let pixels = vec![rgb(1), rgb(2), rgb(3), rgb(4)];
        let encoded = codec.encode(&pixels, 2, 2).unwrap();
        assert_eq!(encoded.rows().len(), 2);
        assert!(encoded.rows().iter().all(|row| row.tokens().is_empty()));
        let raster = encoded.decode().unwrap();
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.height(), 2);
    }
}
