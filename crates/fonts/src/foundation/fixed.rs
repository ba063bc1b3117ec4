//! Fixed-point 26.6 helpers
//!
//! Glyph metrics are stored as integers where 64 units equal one pixel at
//! the font's design size. Conversion to floats happens only when layout
//! emits its normalized output.

use super::math::{FixedVec2, PenVec2, Vec2};

/// Number of fractional bits in a 26.6 value
pub const FIXED_SHIFT: u32 = 6;

/// One whole pixel in 26.6 units
pub const FIXED_ONE: i32 = 1 << FIXED_SHIFT;

/// Pixel size that font line heights are authored at
pub const REFERENCE_PIXEL_SIZE: u32 = 32;

/// Convert a pixel value to 26.6, rounding to the nearest unit
pub fn to_fixed(pixels: f32) -> i32 {
    (pixels * FIXED_ONE as f32).round() as i32
}

/// Convert a 26.6 value to pixels
pub fn from_fixed(value: i32) -> f32 {
    value as f32 / FIXED_ONE as f32
}

/// Convert a pixel-space vector to 26.6
pub fn vec_to_fixed(pixels: Vec2) -> FixedVec2 {
    FixedVec2::new(to_fixed(pixels.x), to_fixed(pixels.y))
}

/// Divisor that maps 26.6 units at `pixel_size` onto the em square
pub fn em_divisor(pixel_size: u32) -> f32 {
    FIXED_ONE as f32 * pixel_size as f32
}

/// Normalize a 26.6 pen position by `64 * pixel_size`
///
/// The result is independent of the requested pixel size; consumers scale
/// it by their own render size.
pub fn descale(value: PenVec2, pixel_size: u32) -> Vec2 {
    let divisor = em_divisor(pixel_size);
    Vec2::new(value.x as f32 / divisor, value.y as f32 / divisor)
}

/// Scale a line height authored at `reference` to `pixel_size`
///
/// Multiplies before dividing so sizes that are not a multiple of the
/// reference still produce a proportional, non-zero advance.
pub fn scale_line_height(line_height: u32, pixel_size: u32, reference: u32) -> i64 {
    if reference == 0 {
        return i64::from(line_height);
    }
    let scaled = u64::from(line_height) * u64::from(pixel_size) / u64::from(reference);
    i64::try_from(scaled).unwrap_or(i64::MAX)
}
