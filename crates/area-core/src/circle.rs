//! # Circle
//!
//! Circle figure defined by its radius in centimeters.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use tracing::trace;

use crate::error::FigureResult;
use crate::figure::{round_area, Figure};
use crate::measurement::{validate_measurement, Measurement};

/// Field name reported in errors and logs.
const RADIUS: &str = "radius";

/// A circle with a validated radius.
///
/// ## Invariant
/// `radius > 0` at all times after construction.
///
/// ## Example
/// ```rust
/// use area_core::{Circle, Figure};
///
/// let mut circle = Circle::new(3.0).unwrap();
/// assert_eq!(circle.area(), 28.27);
///
/// circle.set_radius(5.0).unwrap();
/// assert_eq!(circle.radius(), 5.0);
///
/// assert!(circle.set_radius(-2.0).is_err());
/// assert_eq!(circle.radius(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: Measurement,
}

impl Circle {
    /// Creates a circle, validating the radius.
    pub fn new(radius: f64) -> FigureResult<Self> {
        Ok(Circle {
            radius: validate_measurement(RADIUS, radius)?,
        })
    }

    /// Creates a circle from an already validated measurement.
    #[inline]
    pub const fn from_measurement(radius: Measurement) -> Self {
        Circle { radius }
    }

    /// Returns the radius in centimeters.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius.value()
    }

    /// Reassigns the radius. On error the circle keeps its previous radius.
    pub fn set_radius(&mut self, radius: f64) -> FigureResult<()> {
        self.radius = validate_measurement(RADIUS, radius)?;
        Ok(())
    }
}

impl Figure for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    /// `round(π × radius², 2)`
    fn area(&self) -> f64 {
        let area = round_area(PI * self.radius.squared());
        trace!(radius = self.radius(), area, "computed circle area");
        area
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle with a radius of {} cm.", self.radius)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
