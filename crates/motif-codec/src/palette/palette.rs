//! Palette struct with deterministic construction and motif index lookup.

use std::collections::{HashMap, HashSet};

use super::error::PaletteError;
use crate::color::Rgb;
use crate::motif::{Motif, MAX_PIXELS_PER_MOTIF};
use crate::quantize::quantize;

/// Check a quantization step against its domain.
pub(crate) fn validate_step(step: u16) -> Result<(), PaletteError> {
    if (1..=256).contains(&step) {
        Ok(())
    } else {
        Err(PaletteError::InvalidQuantizationStep { step })
    }
}

/// Check a pixels-per-motif value against its domain.
pub(crate) fn validate_arity(arity: usize) -> Result<(), PaletteError> {
    if (1..=MAX_PIXELS_PER_MOTIF).contains(&arity) {
        Ok(())
    } else {
        Err(PaletteError::InvalidMotifArity { arity })
    }
}

/// An ordered sequence of distinct motifs with positional index assignment.
///
/// The sequence position of a motif is its palette index, and that index
/// is the only reference the encoded rows persist, so the order must be
/// identical between encode-time construction and decode-time
/// deserialization. [`build`](Palette::build) guarantees a reproducible
/// order; [`from_motifs`](Palette::from_motifs) trusts the caller's order
/// (it is the deserialization path) and only re-validates the invariants.
///
/// A motif -> index map is precomputed at construction so per-motif
/// lookup during row encoding is O(1); palettes never change once built.
///
/// # Example
///
/// ```
/// use motif_codec::{Palette, Rgb};
///
/// let pixels = [Rgb::new(10, 10, 10), Rgb::new(250, 250, 250)];
/// let palette = Palette::build(&pixels, 64, 1).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get(0).unwrap().colors(), &[Rgb::new(0, 0, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    motifs: Vec<Motif>,
    index: HashMap<Motif, usize>,
    pixels_per_motif: usize,
}

impl Palette {
    /// Build the palette for a raster.
    ///
    /// Collects the distinct colors of `pixels` (presence only, frequency
    /// is irrelevant), quantizes each with `step`, deduplicates, sorts the
    /// survivors ascending by channel tuple, and forms every
    /// `pixels_per_motif`-ary combination in lexicographic order. Sorting
    /// before index assignment makes the palette byte-reproducible across
    /// re-encodes of the same raster.
    ///
    /// The motif universe is the full Cartesian product of the quantized
    /// colors: with `n` colors a k-pixel palette has `n^k` entries, most
    /// of which no row will ever reference when `k > 1`. This matches the
    /// persisted table layout of earlier encoders; see the crate docs for
    /// the compatibility rationale.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidQuantizationStep`] or
    /// [`PaletteError::InvalidMotifArity`] when the configuration is out
    /// of domain.
    pub fn build(
        pixels: &[Rgb],
        step: u16,
        pixels_per_motif: usize,
    ) -> Result<Self, PaletteError> {
        validate_step(step)?;
        validate_arity(pixels_per_motif)?;

        let distinct: HashSet<Rgb> = pixels.iter().copied().collect();
        let quantized: HashSet<Rgb> = distinct.iter().map(|&c| quantize(c, step)).collect();
        let mut colors: Vec<Rgb> = quantized.into_iter().collect();
        colors.sort_unstable();

        let mut motifs = Vec::with_capacity(colors.len().pow(pixels_per_motif as u32));
        match pixels_per_motif {
            1 => {
                for &a in &colors {
                    motifs.push(Motif::new(&[a]));
                }
            }
            2 => {
                for &a in &colors {
                    for &b in &colors {
                        motifs.push(Motif::new(&[a, b]));
                    }
                }
            }
            _ => {
                for &a in &colors {
                    for &b in &colors {
                        for &c in &colors {
                            motifs.push(Motif::new(&[a, b, c]));
                        }
                    }
                }
            }
        }

        // The product construction cannot repeat a motif; keep the
        // no-duplicates invariant checked anyway.
        debug_assert_eq!(
            motifs.iter().collect::<HashSet<_>>().len(),
            motifs.len(),
            "palette motifs must be distinct"
        );

        Ok(Self::from_parts(motifs, pixels_per_motif))
    }

    /// Reassemble a palette from an already-ordered motif list.
    ///
    /// This is the deserialization path: the list order IS the index
    /// assignment, so the caller must supply motifs in the exact order of
    /// the palette table. Validates that all motifs share one arity and
    /// that none repeats.
    ///
    /// An empty list yields an empty palette with arity 1.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ArityMismatch`] or
    /// [`PaletteError::DuplicateMotif`] on invariant violations.
    pub fn from_motifs(motifs: Vec<Motif>) -> Result<Self, PaletteError> {
        let arity = motifs.first().map(Motif::arity).unwrap_or(1);

        let mut seen = HashSet::with_capacity(motifs.len());
        for (i, motif) in motifs.iter().enumerate() {
            if motif.arity() != arity {
                return Err(PaletteError::ArityMismatch {
                    index: i,
                    expected: arity,
                    found: motif.arity(),
                });
            }
            if !seen.insert(*motif) {
                return Err(PaletteError::DuplicateMotif { index: i });
            }
        }

        Ok(Self::from_parts(motifs, arity))
    }

    fn from_parts(motifs: Vec<Motif>, pixels_per_motif: usize) -> Self {
        let index = motifs.iter().enumerate().map(|(i, &m)| (m, i)).collect();
        Self {
            motifs,
            index,
            pixels_per_motif,
        }
    }

    /// Returns the number of motifs in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Returns true if the palette has no motifs (only possible for an
    /// empty raster).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// The motif at the given palette index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Motif> {
        self.motifs.get(index)
    }

    /// All motifs in index order.
    #[inline]
    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    /// Exact-match lookup of a motif's palette index.
    #[inline]
    pub fn index_of(&self, motif: &Motif) -> Option<usize> {
        self.index.get(motif).copied()
    }

    /// Number of pixels per motif in this palette.
    #[inline]
    pub fn pixels_per_motif(&self) -> usize {
        self.pixels_per_motif
    }
}
