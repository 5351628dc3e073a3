//! Fixed-step channel quantization.
//!
//! Each channel is mapped independently onto a grid of multiples of the
//! quantization step. The computation is exact integer arithmetic; which
//! raw colors collapse onto the same grid point decides the palette's
//! contents, so the rounding must never drift.

use std::cmp::Ordering;

use crate::color::Rgb;

/// Quantize one channel onto the step grid.
///
/// Computes `round(value / step) * step` with ties rounded to the even
/// multiple, then clamps the result into the channel range. `step` must
/// already be validated to `[1, 256]` by the caller; validation lives at
/// the public boundary, not here.
#[inline]
pub(crate) fn quantize_channel(value: u8, step: u16) -> u8 {
    let v = u32::from(value);
    let q = u32::from(step);
    let quotient = v / q;
    let remainder = v % q;
    let nearest = match (remainder * 2).cmp(&q) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };
    (nearest * q).min(255) as u8
}

/// Map a color onto the reduced step grid.
///
/// Channels quantize independently, so the result is a grid point in all
/// three dimensions. Quantization is idempotent: grid points map to
/// themselves, and the clamped top value maps back to itself as well.
///
/// # Example
/// ```
/// use motif_codec::{quantize, Rgb};
///
/// assert_eq!(quantize(Rgb::new(200, 10, 12), 64), Rgb::new(192, 0, 0));
/// // Step 1 keeps every color as-is.
/// assert_eq!(quantize(Rgb::new(13, 77, 201), 1), Rgb::new(13, 77, 201));
/// ```
#[inline]
pub fn quantize(color: Rgb, step: u16) -> Rgb {
    debug_assert!(
        (1..=256).contains(&step),
        "quantization step {step} must be validated to [1, 256] before use"
    );
    Rgb::new(
        quantize_channel(color.r, step),
        quantize_channel(color.g, step),
        quantize_channel(color.b, step),
    )
}
