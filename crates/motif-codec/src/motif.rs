//! Fixed-arity pixel groups.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::Rgb;

/// Largest supported number of pixels per motif.
pub const MAX_PIXELS_PER_MOTIF: usize = 3;

/// An ordered group of one to three colors, the atomic unit addressed by
/// the palette.
///
/// Element order is spatial order within the group and participates in
/// equality. Colors are stored inline so motifs stay `Copy`; equality and
/// hashing cover only the live prefix, never the padding.
#[derive(Debug, Clone, Copy)]
pub struct Motif {
    colors: [Rgb; MAX_PIXELS_PER_MOTIF],
    len: u8,
}

impl Motif {
    /// Build a motif from one to [`MAX_PIXELS_PER_MOTIF`] colors.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the slice length is in range. Arity validation
    /// for caller-supplied configuration happens at the codec boundary.
    pub fn new(colors: &[Rgb]) -> Self {
        debug_assert!(
            (1..=MAX_PIXELS_PER_MOTIF).contains(&colors.len()),
            "motif arity {} must be between 1 and {}",
            colors.len(),
            MAX_PIXELS_PER_MOTIF,
        );
        let mut buf = [Rgb::new(0, 0, 0); MAX_PIXELS_PER_MOTIF];
        buf[..colors.len()].copy_from_slice(colors);
        Self {
            colors: buf,
            len: colors.len() as u8,
        }
    }

    /// The colors of this motif, in spatial order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors[..self.len as usize]
    }

    /// Number of pixels in this motif.
    #[inline]
    pub fn arity(&self) -> usize {
        self.len as usize
    }
}

impl PartialEq for Motif {
    fn eq(&self, other: &Self) -> bool {
        self.colors() == other.colors()
    }
}

impl Eq for Motif {}

impl Hash for Motif {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.colors().hash(state);
    }
}

impl fmt::Display for Motif {
    /// Renders the palette-table record form: one hex field per color,
    /// comma-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
