//! Textual artifact tables: the palette table and the row table.
//!
//! Both tables are row-oriented comma-separated text with one logical
//! record per line:
//!
//! - **Palette table**: one line per motif, in palette index order. Each
//!   field is one color rendered as six lowercase hex digits (two per
//!   channel, zero-padded); a k-pixel motif has k fields.
//! - **Row table**: one line per raster row, in row order. Each field is
//!   a token, `<index>` for a single occurrence or `<index>-<run>` for a
//!   run of at least two, both in lowercase unpadded hex.
//!
//! The serializer terminates records with `\n`; the parser additionally
//! accepts a trailing `\r` per line, which older writers emit. Parsing is
//! strict beyond that: hex syntax, field arity, and run-length violations
//! all fail with [`FormatError::MalformedRecord`] carrying 1-based
//! line/field coordinates.

mod error;

pub use error::{FormatError, MalformedKind, ParseColorError};

use std::str::FromStr;

use crate::color::Rgb;
use crate::motif::{Motif, MAX_PIXELS_PER_MOTIF};
use crate::palette::Palette;
use crate::row::{EncodedRow, Token};

/// Render a palette to its table form.
///
/// One line per motif in index order; re-parsing the output yields a
/// palette with the identical index assignment.
pub fn write_palette_table(palette: &Palette) -> String {
    let mut out = String::new();
    for motif in palette.motifs() {
        out.push_str(&motif.to_string());
        out.push('\n');
    }
    out
}

/// Parse a palette table back into a [`Palette`].
///
/// # Errors
///
/// Returns [`FormatError::MalformedRecord`] on syntax violations and
/// [`FormatError::Palette`] when the records parse but violate palette
/// invariants (duplicates, mixed arity).
pub fn parse_palette_table(input: &str) -> Result<Palette, FormatError> {
    let mut motifs = Vec::new();
    let mut expected_arity: Option<usize> = None;

    for (line_idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line_no = line_idx + 1;

        let fields: Vec<&str> = line.split(',').collect();
        let arity = *expected_arity.get_or_insert(fields.len());
        if fields.len() != arity || fields.len() > MAX_PIXELS_PER_MOTIF {
            return Err(FormatError::MalformedRecord {
                line: line_no,
                field: fields.len(),
                kind: MalformedKind::MotifArity {
                    expected: arity.min(MAX_PIXELS_PER_MOTIF),
                    found: fields.len(),
                },
            });
        }

        let mut colors = Vec::with_capacity(fields.len());
        for (field_idx, field) in fields.iter().enumerate() {
            let color = Rgb::from_str(field).map_err(|err| FormatError::MalformedRecord {
                line: line_no,
                field: field_idx + 1,
                kind: MalformedKind::Color(err),
            })?;
            colors.push(color);
        }
        motifs.push(Motif::new(&colors));
    }

    Palette::from_motifs(motifs).map_err(FormatError::from)
}

/// Render encoded rows to their table form.
pub fn write_row_table(rows: &[EncodedRow]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, token) in row.tokens().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&token.to_string());
        }
        out.push('\n');
    }
    out
}

/// Parse a row table back into encoded rows.
///
/// An empty line is a row with no tokens (a raster narrower than one
/// motif encodes every row that way). A run length of 1 is accepted and
/// normalized to the single form; the serializer never emits it.
///
/// # Errors
///
/// Returns [`FormatError::MalformedRecord`] on syntax violations.
pub fn parse_row_table(input: &str) -> Result<Vec<EncodedRow>, FormatError> {
    let mut rows = Vec::new();

    for (line_idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let mut tokens = Vec::new();
        if !line.is_empty() {
            for (field_idx, field) in line.split(',').enumerate() {
                let token = parse_token(field).map_err(|kind| FormatError::MalformedRecord {
                    line: line_idx + 1,
                    field: field_idx + 1,
                    kind,
                })?;
                tokens.push(token);
            }
        }
        rows.push(EncodedRow::new(tokens));
    }

    Ok(rows)
}

fn parse_token(field: &str) -> Result<Token, MalformedKind> {
    let parts: Vec<&str> = field.split('-').collect();
    match parts.as_slice() {
        [index] => {
            let index = usize::from_str_radix(index, 16).map_err(MalformedKind::Index)?;
            Ok(Token::Single { index })
        }
        [index, run] => {
            let index = usize::from_str_radix(index, 16).map_err(MalformedKind::Index)?;
            let length = usize::from_str_radix(run, 16).map_err(MalformedKind::RunLength)?;
            if length == 0 {
                return Err(MalformedKind::ZeroRunLength);
            }
            Ok(Token::from_run(index, length))
        }
        _ => Err(MalformedKind::TokenShape { parts: parts.len() }),
    }
}
