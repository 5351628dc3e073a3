//! motif-codec: lossy motif-palette image codec
//!
//! This library quantizes an RGB raster onto a reduced, image-specific
//! color grid, groups pixels into fixed-size tuples ("motifs"),
//! deduplicates those motifs into an ordered palette, and run-length
//! encodes each row as a sequence of palette indices. The inverse path
//! reconstructs a raster from the persisted palette and row tables.
//!
//! # Quick Start
//!
//! [`MotifCodec`] is the primary entry point:
//!
//! ```
//! use motif_codec::{EncodedImage, MotifCodec, Rgb};
//!
//! let codec = MotifCodec::new(64, 1).unwrap();
//! let pixels = vec![Rgb::new(100, 100, 100), Rgb::new(110, 110, 110)];
//! let encoded = codec.encode(&pixels, 2, 1).unwrap();
//!
//! // Persist the two tables, parse them back, reconstruct.
//! let palette_table = encoded.palette_table();
//! let row_table = encoded.row_table();
//! let reparsed = EncodedImage::from_tables(&palette_table, &row_table).unwrap();
//! let restored = reparsed.decode().unwrap();
//!
//! assert_eq!(restored.pixels(), &[Rgb::new(128, 128, 128); 2]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! raw pixels                (borrowed row-major &[Rgb])
//!     |
//!     v
//! quantize                  (per channel: round-to-step, ties to even)
//!     |
//!     v
//! Palette::build            (distinct colors -> sorted -> k-ary product)
//!     |                      BARRIER: every index exists before any row
//!     |                      is encoded
//!     v
//! group_row + encode_row    (k-chunks, maximal runs -> tokens)
//!     |
//!     v
//! EncodedImage              (palette + rows; owns both)
//!     |
//!     +--> palette_table / row_table      (persisted artifact pair)
//!     |
//!     +--> decode            (pure lookup/expansion -> Raster)
//! ```
//!
//! # Persisted artifact
//!
//! Two comma-separated text tables, one logical record per line:
//!
//! | Table | One line per | Field syntax |
//! |-------|--------------|--------------|
//! | Palette | motif, in index order | color as 6 lowercase hex digits |
//! | Rows | raster row, in row order | `<index>` or `<index>-<run>`, lowercase unpadded hex |
//!
//! See the [`format`] module for the exact rules.
//!
//! # Determinism
//!
//! Palette index assignment is positional and is the only motif reference
//! the rows persist, so the palette order must be reproducible between
//! encode and any later decode. [`Palette::build`] sorts quantized colors
//! by channel tuple before forming motifs: re-encoding the same raster
//! with the same settings yields byte-identical tables.
//!
//! The palette for `k > 1` is the full k-ary combination universe over
//! the quantized colors (n^2 or n^3 entries), oversized relative to what
//! any row references. That layout is what existing artifact readers
//! expect, so it is kept; [`EncodedImage::referenced_entries`] reports
//! how much of it a given image actually uses.
//!
//! # Lossiness
//!
//! Two places, both in the encoder, both deliberate:
//!
//! - Quantization collapses nearby colors onto one grid point.
//! - Rows are grouped into whole motifs; trailing pixels that do not fill
//!   one are dropped (a width-5 raster at k=2 decodes 4 pixels wide).
//!
//! Decoding adds no loss of its own: given the encoded representation it
//! reproduces the quantized, truncated raster exactly.

pub mod api;
pub mod color;
pub mod format;
pub mod motif;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod row;

#[cfg(test)]
mod domain_tests;

pub use api::{CodecError, MotifCodec};
pub use color::Rgb;
pub use format::{FormatError, MalformedKind, ParseColorError};
pub use motif::{Motif, MAX_PIXELS_PER_MOTIF};
pub use output::{EncodedImage, Raster};
pub use palette::{Palette, PaletteError};
pub use quantize::quantize;
pub use row::{
    decode_row, encode_row, flatten_motifs, group_row, DecodeError, EncodeError, EncodedRow, Token,
};
