//! EncodedImage: palette plus run-length rows, the persisted unit.

use std::collections::HashSet;

use super::raster::Raster;
use crate::format::{self, FormatError};
use crate::palette::Palette;
use crate::row::{decode_row, flatten_motifs, DecodeError, EncodedRow};

/// The complete encoded form of one raster.
///
/// Owns the palette and the ordered per-row token sequences. Created by
/// [`MotifCodec::encode`](crate::MotifCodec::encode) or by parsing the
/// two artifact tables, then either serialized out or decoded back into a
/// [`Raster`]. Palette and rows are a matched pair: the rows only carry
/// positional palette indices, so pairing them with any other palette
/// produces garbage or fails outright.
///
/// # Example
///
/// ```
/// use motif_codec::{EncodedImage, MotifCodec, Rgb};
///
/// let codec = MotifCodec::new(64, 1).unwrap();
/// let pixels = vec![Rgb::new(30, 40, 200); 6];
/// let encoded = codec.encode(&pixels, 3, 2).unwrap();
///
/// // Serialize, re-parse, decode.
/// let reparsed =
///     EncodedImage::from_tables(&encoded.palette_table(), &encoded.row_table()).unwrap();
/// let raster = reparsed.decode().unwrap();
/// assert_eq!(raster.width(), 3);
/// assert_eq!(raster.pixels()[0], Rgb::new(0, 64, 192));
/// ```
#[derive(Debug, Clone)]
pub struct EncodedImage {
    palette: Palette,
    rows: Vec<EncodedRow>,
}

impl EncodedImage {
    /// Pair a palette with its encoded rows.
    pub fn new(palette: Palette, rows: Vec<EncodedRow>) -> Self {
        Self { palette, rows }
    }

    /// The palette the rows index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The encoded rows, in raster row order.
    #[inline]
    pub fn rows(&self) -> &[EncodedRow] {
        &self.rows
    }

    /// Total number of tokens across all rows.
    pub fn token_count(&self) -> usize {
        self.rows.iter().map(|row| row.tokens().len()).sum()
    }

    /// Number of distinct palette entries the rows actually reference.
    ///
    /// For multi-pixel motifs this is typically far below
    /// `palette().len()`, since the palette carries the full combination
    /// universe.
    pub fn referenced_entries(&self) -> usize {
        let referenced: HashSet<usize> = self
            .rows
            .iter()
            .flat_map(|row| row.tokens().iter().map(|token| token.index()))
            .collect();
        referenced.len()
    }

    /// Render the palette table (see the [`format`] module for the
    /// layout).
    pub fn palette_table(&self) -> String {
        format::write_palette_table(&self.palette)
    }

    /// Render the row table.
    pub fn row_table(&self) -> String {
        format::write_row_table(&self.rows)
    }

    /// Parse a palette table / row table pair back into an
    /// `EncodedImage`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when either table fails syntactic or
    /// palette-invariant validation.
    pub fn from_tables(palette_table: &str, row_table: &str) -> Result<Self, FormatError> {
        let palette = format::parse_palette_table(palette_table)?;
        let rows = format::parse_row_table(row_table)?;
        Ok(Self::new(palette, rows))
    }

    /// Reconstruct the raster.
    ///
    /// Pure lookup and expansion: lossless relative to the encoded
    /// representation, even though the encode that produced it was lossy
    /// relative to the original raster.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodeError::IndexOutOfRange`] on a token beyond the
    /// palette and [`DecodeError::InconsistentRowWidth`] when rows expand
    /// to differing pixel counts.
    pub fn decode(&self) -> Result<Raster, DecodeError> {
        let mut pixels = Vec::new();
        let mut width: Option<usize> = None;

        for (y, row) in self.rows.iter().enumerate() {
            let motifs = decode_row(row, &self.palette)?;
            let row_pixels = flatten_motifs(&motifs);
            let expected = *width.get_or_insert(row_pixels.len());
            if row_pixels.len() != expected {
                return Err(DecodeError::InconsistentRowWidth {
                    row: y + 1,
                    expected,
                    found: row_pixels.len(),
                });
            }
            pixels.extend(row_pixels);
        }

        Ok(Raster::new(pixels, width.unwrap_or(0), self.rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::motif::Motif;
    use crate::row::Token;

    fn rgb(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    fn two_entry_image() -> EncodedImage {
        let palette = Palette::from_motifs(vec![
            Motif::new(&[rgb(0)]),
            Motif::new(&[rgb(255)]),
        ])
        .unwrap();
        let rows = vec![
            EncodedRow::new(vec![Token::Run { index: 0, length: 3 }]),
            EncodedRow::new(vec![
                Token::Single { index: 1 },
                Token::Run { index: 0, length: 2 },
            ]),
        ];
        EncodedImage::new(palette, rows)
    }

    #[test]
    fn test_decode_assembles_raster() {
        let raster = two_entry_image().decode().unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.row(0), &[rgb(0), rgb(0), rgb(0)]);
        assert_eq!(raster.row(1), &[rgb(255), rgb(0), rgb(0)]);
    }

    #[test]
    fn test_counters() {
        let image = two_entry_image();
        assert_eq!(image.token_count(), 3);
        assert_eq!(image.referenced_entries(), 2);
    }

    #[test]
    fn test_decode_rejects_ragged_rows() {
        let palette = Palette::from_motifs(vec![Motif::new(&[rgb(0)])]).unwrap();
        let rows = vec![
            EncodedRow::new(vec![Token::Single { index: 0 }]),
            EncodedRow::new(vec![Token::Run { index: 0, length: 2 }]),
        ];
        let result = EncodedImage::new(palette, rows).decode();
        assert_eq!(
            result,
            Err(DecodeError::InconsistentRowWidth {
                row: 2,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_decode_empty_image() {
        let image = EncodedImage::new(Palette::from_motifs(Vec::new()).unwrap(), Vec::new());
        let raster = image.decode().unwrap();
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.height(), 0);
        assert!(raster.pixels().is_empty());
    }
}
