//! Row expansion and motif flattening.

use super::error::DecodeError;
use super::EncodedRow;
use crate::color::Rgb;
use crate::motif::Motif;
use crate::palette::Palette;

/// Expand an encoded row back into its motif sequence.
///
/// Each token resolves its palette entry and repeats it `run_length`
/// times, in order. Decoding is pure lookup and expansion; no
/// quantization is re-derived, so it is lossless relative to the encoded
/// representation.
///
/// # Errors
///
/// Fails with [`DecodeError::IndexOutOfRange`] when a token references
/// an index at or beyond the palette length.
pub fn decode_row(row: &EncodedRow, palette: &Palette) -> Result<Vec<Motif>, DecodeError> {
    let mut motifs = Vec::with_capacity(row.expanded_len());
    for token in row.tokens() {
        let index = token.index();
        let motif = palette.get(index).ok_or(DecodeError::IndexOutOfRange {
            index,
            palette_len: palette.len(),
        })?;
        motifs.extend(std::iter::repeat(*motif).take(token.run_length()));
    }
    Ok(motifs)
}

/// Concatenate each motif's colors in order into a pixel sequence.
pub fn flatten_motifs(motifs: &[Motif]) -> Vec<Rgb> {
    motifs
        .iter()
        .flat_map(|motif| motif.colors().iter().copied())
        .collect()
}
