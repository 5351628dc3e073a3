//! Error types for the artifact table syntax.

use std::fmt;
use std::num::ParseIntError;

use crate::palette::PaletteError;

/// Error type for parsing one color field of a palette-table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Field is not exactly six ASCII characters
    InvalidLength {
        /// Byte length of the rejected field
        found: usize,
    },
    /// Invalid hexadecimal characters encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { found } => {
                write!(f, "color field has {found} characters, expected 6 hex digits")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {err}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// What went wrong inside a malformed record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// A palette color field failed hex or length validation
    Color(ParseColorError),
    /// A palette record has the wrong number of color fields
    MotifArity {
        /// Field count established by the first record (or the format limit)
        expected: usize,
        /// Field count of the offending record
        found: usize,
    },
    /// A token's palette index is not valid hex
    Index(ParseIntError),
    /// A token's run length is not valid hex
    RunLength(ParseIntError),
    /// A token carries a run length of zero
    ZeroRunLength,
    /// A token has more than one `-` separator
    TokenShape {
        /// Number of `-`-separated parts found
        parts: usize,
    },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::Color(err) => write!(f, "{err}"),
            MalformedKind::MotifArity { expected, found } => {
                write!(f, "record has {found} color fields, expected {expected}")
            }
            MalformedKind::Index(err) => write!(f, "invalid palette index: {err}"),
            MalformedKind::RunLength(err) => write!(f, "invalid run length: {err}"),
            MalformedKind::ZeroRunLength => write!(f, "run length must be at least 1"),
            MalformedKind::TokenShape { parts } => {
                write!(
                    f,
                    "token has {parts} parts, expected <index> or <index>-<run>"
                )
            }
        }
    }
}

/// Error type for artifact table parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A record failed syntactic validation. `line` and `field` are
    /// 1-based coordinates of the offending record.
    MalformedRecord {
        /// Line number of the record
        line: usize,
        /// Field number within the record
        field: usize,
        /// The specific violation
        kind: MalformedKind,
    },
    /// The parsed palette failed re-validation (duplicate motifs or
    /// mixed arity across records)
    Palette(PaletteError),
}

impl From<PaletteError> for FormatError {
    fn from(err: PaletteError) -> Self {
        FormatError::Palette(err)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MalformedRecord { line, field, kind } => {
                write!(f, "malformed record at line {line}, field {field}: {kind}")
            }
            FormatError::Palette(err) => {
                write!(f, "invalid palette table: {err}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::MalformedRecord { kind, .. } => match kind {
                MalformedKind::Color(err) => Some(err),
                MalformedKind::Index(err) | MalformedKind::RunLength(err) => Some(err),
                _ => None,
            },
            FormatError::Palette(err) => Some(err),
        }
    }
}
