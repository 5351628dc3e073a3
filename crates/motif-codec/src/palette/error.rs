//! Error types for palette configuration and construction.

use std::fmt;

/// Error type for palette configuration and validation.
///
/// Returned when the codec configuration is out of domain or when a
/// deserialized palette violates the palette invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Quantization step outside [1, 256]
    InvalidQuantizationStep {
        /// The rejected step value
        step: u16,
    },
    /// Pixels-per-motif outside {1, 2, 3}
    InvalidMotifArity {
        /// The rejected arity value
        arity: usize,
    },
    /// Duplicate motif found at the specified index
    DuplicateMotif {
        /// Index where the duplicate was found
        index: usize,
    },
    /// A motif's arity differs from the palette's
    ArityMismatch {
        /// Index of the offending motif
        index: usize,
        /// Arity established by the first motif
        expected: usize,
        /// Arity of the offending motif
        found: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidQuantizationStep { step } => {
                write!(f, "invalid quantization step {step} (expected 1 to 256)")
            }
            PaletteError::InvalidMotifArity { arity } => {
                write!(f, "invalid pixels-per-motif {arity} (expected 1, 2 or 3)")
            }
            PaletteError::DuplicateMotif { index } => {
                write!(f, "duplicate motif found at palette index {index}")
            }
            PaletteError::ArityMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "motif at palette index {index} has {found} colors, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
