//! Unified error type for the motif-codec public API.
//!
//! [`CodecError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::format::FormatError;
use crate::palette::PaletteError;
use crate::row::{DecodeError, EncodeError};

/// Unified error type for the motif-codec public API.
///
/// # Example
///
/// ```
/// use motif_codec::{CodecError, EncodedImage, Raster};
///
/// fn reconstruct(palette_table: &str, row_table: &str) -> Result<Raster, CodecError> {
///     let encoded = EncodedImage::from_tables(palette_table, row_table)?;
///     Ok(encoded.decode()?)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Configuration or palette invariant violation
    Palette(PaletteError),
    /// Row encoding failure
    Encode(EncodeError),
    /// Row decoding failure
    Decode(DecodeError),
    /// Artifact table syntax violation
    Format(FormatError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Palette(err) => write!(f, "palette error: {err}"),
            CodecError::Encode(err) => write!(f, "encode error: {err}"),
            CodecError::Decode(err) => write!(f, "decode error: {err}"),
            CodecError::Format(err) => write!(f, "format error: {err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Palette(err) => Some(err),
            CodecError::Encode(err) => Some(err),
            CodecError::Decode(err) => Some(err),
            CodecError::Format(err) => Some(err),
        }
    }
}

impl From<PaletteError> for CodecError {
    fn from(err: PaletteError) -> Self {
        CodecError::Palette(err)
    }
}

impl From<EncodeError> for CodecError {
    fn from(err: EncodeError) -> Self {
        CodecError::Encode(err)
    }
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        CodecError::Decode(err)
    }
}

impl From<FormatError> for CodecError {
    fn from(err: FormatError) -> Self {
        CodecError::Format(err)
    }
}
