//! Row grouping and run-length encoding.

use std::collections::HashMap;

use super::error::EncodeError;
use super::{EncodedRow, Token};
use crate::color::Rgb;
use crate::motif::Motif;
use crate::palette::Palette;
use crate::quantize::quantize;

/// Group one raster row into quantized motifs.
///
/// Pixels are quantized through `memo`, a per-encode cache keyed by raw
/// color so repeated colors quantize once, then taken in consecutive
/// non-overlapping chunks of `pixels_per_motif`. A trailing chunk with
/// fewer than `pixels_per_motif` pixels is dropped, so up to
/// `pixels_per_motif - 1` pixels per row are lost; this truncation is
/// part of the format, not an accident of this implementation.
///
/// `step` and `pixels_per_motif` must already be validated at the codec
/// boundary.
pub fn group_row(
    row: &[Rgb],
    step: u16,
    pixels_per_motif: usize,
    memo: &mut HashMap<Rgb, Rgb>,
) -> Vec<Motif> {
    debug_assert!(pixels_per_motif >= 1, "arity is validated at the boundary");

    let mut quantized = Vec::with_capacity(row.len());
    for &pixel in row {
        let reduced = *memo.entry(pixel).or_insert_with(|| quantize(pixel, step));
        quantized.push(reduced);
    }

    quantized
        .chunks_exact(pixels_per_motif)
        .map(Motif::new)
        .collect()
}

/// Run-length encode a row of motifs against a palette.
///
/// Walks the row left to right merging maximal runs of identical
/// consecutive motifs. A run of length 1 becomes [`Token::Single`];
/// longer runs become [`Token::Run`].
///
/// # Errors
///
/// Fails with [`EncodeError::UnknownMotif`] when a motif has no palette
/// entry. A palette built over the same raster always contains every row
/// motif, but palette and rows can be supplied independently, so the
/// lookup is checked.
pub fn encode_row(motifs: &[Motif], palette: &Palette) -> Result<EncodedRow, EncodeError> {
    let mut tokens = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for motif in motifs {
        let index = palette
            .index_of(motif)
            .ok_or(EncodeError::UnknownMotif { motif: *motif })?;
        run = match run {
            Some((current, length)) if current == index => Some((current, length + 1)),
            Some((current, length)) => {
                tokens.push(Token::from_run(current, length));
                Some((index, 1))
            }
            None => Some((index, 1)),
        };
    }
    if let Some((current, length)) = run {
        tokens.push(Token::from_run(current, length));
    }

    Ok(EncodedRow::new(tokens))
}
