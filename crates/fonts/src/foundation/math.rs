//! Math utilities and types
//!
//! Layout works on integer vectors in 26.6 fixed point and only converts to
//! floating point for the final normalized output.

pub use nalgebra::Vector2;

/// 2D floating point vector, used for normalized layout output
pub type Vec2 = Vector2<f32>;

/// 2D fixed-point vector in 26.6 units (1/64 of a pixel)
pub type FixedVec2 = Vector2<i32>;

/// Pen position in 26.6 units
///
/// Wider than glyph metrics so that long texts keep accumulating advances
/// and line breaks without overflowing.
pub type PenVec2 = Vector2<i64>;

/// Widen glyph metrics to pen precision
pub fn widen(value: FixedVec2) -> PenVec2 {
    PenVec2::new(i64::from(value.x), i64::from(value.y))
}

/// Component-wise saturating sum of two pen positions
pub fn saturating_add(a: PenVec2, b: PenVec2) -> PenVec2 {
    PenVec2::new(a.x.saturating_add(b.x), a.y.saturating_add(b.y))
}

/// Squared euclidean distance between two points
pub fn distance_squared(a: &Vec2, b: &Vec2) -> f32 {
    (a - b).norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(distance_squared(&a, &b), 25.0);
        assert_eq!(distance_squared(&a, &a), 0.0);
    }

    #[test]
    fn test_fixed_vec_arithmetic() {
        let a = FixedVec2::new(64, -32);
        let b = FixedVec2::new(128, 32);
        assert_eq!(a + b, FixedVec2::new(192, 0));
        assert_eq!(b - a, FixedVec2::new(64, 64));
    }

    #[test]
    fn test_widen_and_saturate() {
        let pen = widen(FixedVec2::new(i32::MAX, i32::MIN));
        assert_eq!(pen, PenVec2::new(2_147_483_647, -2_147_483_648));
        assert_eq!(saturating_add(pen, pen), PenVec2::new(4_294_967_294, -4_294_967_296));
        assert_eq!(
            saturating_add(PenVec2::new(i64::MAX, i64::MIN), PenVec2::new(1, -1)),
            PenVec2::new(i64::MAX, i64::MIN)
        );
    }
}
