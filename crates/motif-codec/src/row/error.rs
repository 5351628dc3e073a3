//! Error types for row encoding and decoding.

use std::fmt;

use crate::motif::Motif;

/// Error type for row encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A row motif has no entry in the palette.
    ///
    /// Cannot happen when palette and rows come from one encode pass over
    /// the same raster; it indicates the caller paired a row with a
    /// foreign palette.
    UnknownMotif {
        /// The motif that failed the lookup
        motif: Motif,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownMotif { motif } => {
                write!(f, "motif {motif} is not present in the palette")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error type for row decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token references an index beyond the palette, indicating a
    /// corrupt or mismatched palette/row-table pair.
    IndexOutOfRange {
        /// The out-of-range palette index
        index: usize,
        /// Size of the palette the token was resolved against
        palette_len: usize,
    },
    /// Two rows expanded to different pixel widths; the raster would not
    /// be rectangular.
    InconsistentRowWidth {
        /// 1-based number of the offending row
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::IndexOutOfRange { index, palette_len } => {
                write!(
                    f,
                    "palette index {index} is out of range for a palette of {palette_len} motifs"
                )
            }
            DecodeError::InconsistentRowWidth {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} decodes to {found} pixels, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
