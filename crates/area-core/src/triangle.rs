//! # Triangle
//!
//! Triangle figure defined by three interdependent side lengths.
//!
//! ## Side Assignment Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_side1(value)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_measurement("side1", value) ── fails? → TypeArgument /        │
//! │       │                                           InvalidMeasurement    │
//! │       ▼                                                                 │
//! │  prospective = [value, side2, side3]                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  a+b>c && a+c>b && b+c>a ? ── no → InvalidTriangle (nothing stored)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commit                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation happens before anything is stored, so a rejected assignment
//! leaves the triangle exactly as it was and an invalid triangle is never
//! observable.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

use crate::error::{FigureError, FigureResult};
use crate::figure::{round_area, Figure};
use crate::measurement::{validate_measurement, Measurement};

// =============================================================================
// Side
// =============================================================================

/// Names one of the three sides of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
    Third,
}

impl Side {
    /// All sides in positional order.
    pub const ALL: [Side; 3] = [Side::First, Side::Second, Side::Third];

    /// Field name used in errors and logs (`side1`, `side2`, `side3`).
    pub const fn field(&self) -> &'static str {
        match self {
            Side::First => "side1",
            Side::Second => "side2",
            Side::Third => "side3",
        }
    }

    const fn index(&self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
            Side::Third => 2,
        }
    }
}

// =============================================================================
// Triangle
// =============================================================================

/// A triangle whose sides always satisfy the strict triangle inequality.
///
/// ## Example
/// ```rust
/// use area_core::{Figure, FigureError, Triangle};
///
/// let mut triangle = Triangle::new(&[3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(triangle.area(), 6.0);
/// assert!(triangle.is_right_triangle());
///
/// let err = triangle.set_side1(100.0).unwrap_err();
/// assert!(matches!(err, FigureError::InvalidTriangle { .. }));
/// assert_eq!(triangle.sides(), [3.0, 4.0, 5.0]);
///
/// assert!(matches!(
///     Triangle::new(&[3.0, 4.0]),
///     Err(FigureError::ArgumentCount { given: 2 })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    side1: Measurement,
    side2: Measurement,
    side3: Measurement,
}

impl Triangle {
    /// Creates a triangle from one side length (equilateral) or three side
    /// lengths (assigned positionally to side1, side2, side3).
    ///
    /// ## Errors
    /// - `ArgumentCount` for any other number of values
    /// - `TypeArgument` / `InvalidMeasurement` for the first bad side, in order
    /// - `InvalidTriangle` if the three sides break the triangle inequality
    pub fn new(sides: &[f64]) -> FigureResult<Self> {
        match sides {
            [side] => Self::equilateral(*side),
            [a, b, c] => Self::from_sides(*a, *b, *c),
            _ => {
                debug!(given = sides.len(), "rejected triangle side count");
                Err(FigureError::ArgumentCount { given: sides.len() })
            }
        }
    }

    /// Creates a triangle with all three sides equal to `side`.
    pub fn equilateral(side: f64) -> FigureResult<Self> {
        Self::from_sides(side, side, side)
    }

    /// Creates a triangle from three side lengths.
    pub fn from_sides(side1: f64, side2: f64, side3: f64) -> FigureResult<Self> {
        let side1 = validate_measurement(Side::First.field(), side1)?;
        let side2 = validate_measurement(Side::Second.field(), side2)?;
        let side3 = validate_measurement(Side::Third.field(), side3)?;

        Self::from_measurements([side1, side2, side3])
    }

    /// Creates a triangle from already validated measurements, checking only
    /// the triangle inequality.
    pub fn from_measurements(sides: [Measurement; 3]) -> FigureResult<Self> {
        check_triangle_inequality(sides.map(|side| side.value()))?;

        let [side1, side2, side3] = sides;
        Ok(Triangle { side1, side2, side3 })
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    #[inline]
    pub fn side1(&self) -> f64 {
        self.side1.value()
    }

    #[inline]
    pub fn side2(&self) -> f64 {
        self.side2.value()
    }

    #[inline]
    pub fn side3(&self) -> f64 {
        self.side3.value()
    }

    /// Returns the length of the given side.
    pub fn side(&self, side: Side) -> f64 {
        self.sides()[side.index()]
    }

    /// Returns `[side1, side2, side3]`.
    pub fn sides(&self) -> [f64; 3] {
        [self.side1(), self.side2(), self.side3()]
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    pub fn set_side1(&mut self, value: f64) -> FigureResult<()> {
        self.set_side(Side::First, value)
    }

    pub fn set_side2(&mut self, value: f64) -> FigureResult<()> {
        self.set_side(Side::Second, value)
    }

    pub fn set_side3(&mut self, value: f64) -> FigureResult<()> {
        self.set_side(Side::Third, value)
    }

    /// Reassigns one side, re-validating it against the other two current
    /// sides. On error the triangle is unchanged.
    pub fn set_side(&mut self, side: Side, value: f64) -> FigureResult<()> {
        let measurement = validate_measurement(side.field(), value)?;

        let mut prospective = [self.side1, self.side2, self.side3];
        prospective[side.index()] = measurement;

        *self = Self::from_measurements(prospective)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Derived properties
    // -------------------------------------------------------------------------

    /// Whether the sides form a right triangle (`a² + b² == c²` with sides
    /// sorted ascending). Exact floating-point comparison, recomputed on
    /// every call.
    pub fn is_right_triangle(&self) -> bool {
        let mut sides = self.sides();
        sides.sort_by(f64::total_cmp);
        let [a, b, c] = sides;
        a * a + b * b == c * c
    }

    /// Sum of the three sides (not rounded).
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }
}

/// Checks the strict triangle inequality for all three permutations.
fn check_triangle_inequality(sides: [f64; 3]) -> FigureResult<()> {
    let [a, b, c] = sides;

    if a + b > c && a + c > b && b + c > a {
        Ok(())
    } else {
        debug!(?sides, "rejected sides breaking the triangle inequality");
        Err(FigureError::InvalidTriangle { sides })
    }
}

impl Figure for Triangle {
    fn kind(&self) -> &'static str {
        "triangle"
    }

    /// Heron's formula rounded to two decimals.
    fn area(&self) -> f64 {
        let [a, b, c] = self.sides();
        let p = (a + b + c) / 2.0;
        // Clamp float noise on near-degenerate triangles
        let radicand = (p * (p - a) * (p - b) * (p - c)).max(0.0);
        let area = round_area(radicand.sqrt());
        trace!(side1 = a, side2 = b, side3 = c, area, "computed triangle area");
        area
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle with sides {} cm, {} cm, {} cm.",
            self.side1, self.side2, self.side3
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE1: f64 = 3.0;
    const SIDE2: f64 = 4.0;
    const SIDE3: f64 = 5.0;

    fn heron(a: f64, b: f64, c: f64) -> f64 {
        let p = (a + b + c) / 2.0;
        round_area((p * (p - a) * (p - b) * (p - c)).sqrt())
    }

    fn right_triangle() -> Triangle {
        Triangle::from_sides(SIDE1, SIDE2, SIDE3).unwrap()
    }

    #[test]
    fn test_init_with_one_argument() {
        let triangle = Triangle::new(&[SIDE1]).unwrap();
        assert_eq!(triangle.side1(), SIDE1);
        assert_eq!(triangle.side2(), SIDE1);
        assert_eq!(triangle.side3(), SIDE1);

        let triangle = Triangle::equilateral(5.0).unwrap();
        assert_eq!(triangle.sides(), [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_init_with_three_arguments() {
        let triangle = Triangle::new(&[SIDE1, SIDE2, SIDE3]).unwrap();
        assert_eq!(triangle.side1(), SIDE1);
        assert_eq!(triangle.side2(), SIDE2);
        assert_eq!(triangle.side3(), SIDE3);
    }

    #[test]
    fn test_init_with_wrong_argument_count() {
        assert!(matches!(
            Triangle::new(&[SIDE1, SIDE2]),
            Err(FigureError::ArgumentCount { given: 2 })
        ));
        assert!(matches!(
            Triangle::new(&[]),
            Err(FigureError::ArgumentCount { given: 0 })
        ));
        assert!(matches!(
            Triangle::new(&[1.0, 1.0, 1.0, 1.0]),
            Err(FigureError::ArgumentCount { given: 4 })
        ));
    }

    #[test]
    fn test_init_rejects_impossible_triangle() {
        let err = Triangle::from_sides(1.0, 2.0, 3.0).unwrap_err();
        assert_eq!(err, FigureError::InvalidTriangle { sides: [1.0, 2.0, 3.0] });

        assert!(Triangle::from_sides(10.0, 1.0, 1.0).is_err());
        assert!(Triangle::from_sides(1.0, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_init_reports_first_bad_side() {
        let err = Triangle::from_sides(3.0, -4.0, 0.0).unwrap_err();
        assert!(matches!(err, FigureError::InvalidMeasurement { ref field, .. } if field == "side2"));

        let err = Triangle::new(&[f64::NAN]).unwrap_err();
        assert!(matches!(err, FigureError::TypeArgument { ref field } if field == "side1"));
    }

    #[test]
    fn test_area() {
        assert_eq!(right_triangle().area(), heron(SIDE1, SIDE2, SIDE3));
        assert_eq!(right_triangle().area(), 6.0);
        assert_eq!(Triangle::equilateral(5.0).unwrap().area(), 10.83);
        assert_eq!(
            Triangle::from_sides(7.0, 8.0, 9.0).unwrap().area(),
            heron(7.0, 8.0, 9.0)
        );
    }

    #[test]
    fn test_area_rounds_ties_to_even() {
        // Heron gives exactly 2.625 for these sides
        assert_eq!(Triangle::from_sides(1.75, 3.75, 5.0).unwrap().area(), 2.62);
        assert_eq!(Triangle::from_sides(2.75, 3.25, 5.0).unwrap().area(), 4.12);
        assert_eq!(Triangle::from_sides(4.25, 6.25, 7.0).unwrap().area(), 13.12);
    }

    #[test]
    fn test_side_getters() {
        let triangle = right_triangle();
        assert_eq!(triangle.side(Side::First), SIDE1);
        assert_eq!(triangle.side(Side::Second), SIDE2);
        assert_eq!(triangle.side(Side::Third), SIDE3);
    }

    #[test]
    fn test_side_setter() {
        let mut triangle = right_triangle();
        triangle.set_side1(6.0).unwrap();
        assert_eq!(triangle.side1(), 6.0);
        assert_eq!(triangle.sides(), [6.0, SIDE2, SIDE3]);

        triangle.set_side(Side::Second, 7.0).unwrap();
        assert_eq!(triangle.side2(), 7.0);
    }

    #[test]
    fn test_side_setter_invalid_value() {
        let mut triangle = right_triangle();
        assert!(matches!(
            triangle.set_side1(-5.0),
            Err(FigureError::InvalidMeasurement { .. })
        ));
        assert!(matches!(
            triangle.set_side2(f64::NAN),
            Err(FigureError::TypeArgument { .. })
        ));
        assert_eq!(triangle.sides(), [SIDE1, SIDE2, SIDE3]);
    }

    #[test]
    fn test_side_setter_rolls_back_impossible_triangle() {
        let mut triangle = right_triangle();

        let err = triangle.set_side1(100.0).unwrap_err();
        assert_eq!(err, FigureError::InvalidTriangle { sides: [100.0, SIDE2, SIDE3] });
        assert_eq!(triangle.side1(), SIDE1);

        assert!(triangle.set_side3(7.0).is_err());
        assert_eq!(triangle, right_triangle());
    }

    #[test]
    fn test_is_right_triangle() {
        let mut triangle = right_triangle();
        assert!(triangle.is_right_triangle());

        triangle.set_side3(6.0).unwrap();
        assert!(!triangle.is_right_triangle());

        // Order of sides does not matter
        assert!(Triangle::from_sides(5.0, 3.0, 4.0).unwrap().is_right_triangle());
        assert!(!Triangle::equilateral(1.0).unwrap().is_right_triangle());
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(right_triangle().perimeter(), 12.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            right_triangle().to_string(),
            "Triangle with sides 3 cm, 4 cm, 5 cm."
        );
        assert_eq!(
            Triangle::equilateral(1.5).unwrap().to_string(),
            "Triangle with sides 1.5 cm, 1.5 cm, 1.5 cm."
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(right_triangle()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "side1": 3.0, "side2": 4.0, "side3": 5.0 })
        );
    }
}
