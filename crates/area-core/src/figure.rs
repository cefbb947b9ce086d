//! # Figure Trait
//!
//! The capability every figure shares: reporting its area.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Figure (trait)                                 │
//! │                     kind() ─── area() -> f64                            │
//! │                                 │                                       │
//! │                 ┌───────────────┴───────────────┐                       │
//! │          ┌──────┴──────┐                 ┌──────┴──────┐                │
//! │          │   Circle    │                 │  Triangle   │                │
//! │          │  π × r²     │                 │   Heron     │                │
//! │          └─────────────┘                 └─────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Figures declare conformance explicitly with `impl Figure for ...`, so
//! handing a non-figure to [`calc_area`](crate::calc_area) is a compile error.

use crate::AREA_DECIMALS;

/// A geometric shape capable of reporting its area.
pub trait Figure {
    /// Short lowercase name of the figure kind (`"circle"`, `"triangle"`).
    fn kind(&self) -> &'static str;

    /// Area in square centimeters, rounded to [`AREA_DECIMALS`] places.
    ///
    /// Never negative.
    fn area(&self) -> f64;
}

/// Rounds a raw area to the fixed reporting precision.
///
/// Ties round to even (`2.625` becomes `2.62`). Values too large to carry
/// hundredths are returned unchanged.
///
/// ## Example
/// ```rust
/// use area_core::figure::round_area;
///
/// assert_eq!(round_area(28.274333882308138), 28.27);
/// assert_eq!(round_area(6.0), 6.0);
/// assert_eq!(round_area(2.625), 2.62);
/// ```
pub fn round_area(raw: f64) -> f64 {
    let scale = 10f64.powi(AREA_DECIMALS);
    let scaled = raw * scale;

    // At 2^52 and above every f64 is an integer
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_FRACTION {
        return raw;
    }

    scaled.round_ties_even() / scale
}

/// 2^52: smallest magnitude at which an f64 has no fractional bits.
const MAX_EXACT_FRACTION: f64 = 4_503_599_627_370_496.0;

#[cfg(test)]
mod tests {
    use super::*;

    struct Square(f64);

    impl Figure for Square {
        fn kind(&self) -> &'static str {
            "square"
        }

        fn area(&self) -> f64 {
            round_area(self.0 * self.0)
        }
    }

    #[test]
    fn test_round_area() {
        assert_eq!(round_area(28.274333882308138), 28.27);
        assert_eq!(round_area(78.53981633974483), 78.54);
        assert_eq!(round_area(0.004), 0.0);
    }

    #[test]
    fn test_round_area_ties_to_even() {
        assert_eq!(round_area(2.625), 2.62);
        assert_eq!(round_area(0.125), 0.12);
        assert_eq!(round_area(0.375), 0.38);
    }

    #[test]
    fn test_round_area_keeps_huge_values() {
        let huge = 3.141592653589793e306;
        assert_eq!(round_area(huge), huge);
        assert_eq!(round_area(1e15), 1e15);
        assert_eq!(round_area(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_trait_is_object_safe() {
        let figures: Vec<Box<dyn Figure>> = vec![Box::new(Square(1.5)), Box::new(Square(2.0))];
        let areas: Vec<f64> = figures.iter().map(|f| f.area()).collect();
        assert_eq!(areas, vec![2.25, 4.0]);
        assert_eq!(figures[0].kind(), "square");
    }
}
