//! # Measurement Module
//!
//! The validated numeric field shared by every figure.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Measurement Validation                             │
//! │                                                                         │
//! │  raw input (f64 / i64 / &str / JSON)                                   │
//! │       │                                                                 │
//! │       ├── not a finite number? → TypeArgument                          │
//! │       │                                                                 │
//! │       ├── value <= 0?          → InvalidMeasurement                    │
//! │       │                                                                 │
//! │       └── OK → Measurement (holding one proves value > 0)              │
//! │                                                                         │
//! │  Used by: Circle::radius, Triangle::side1/side2/side3                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use area_core::measurement::{validate_measurement, Measurement};
//!
//! let radius = validate_measurement("radius", 3.0).unwrap();
//! assert_eq!(radius.value(), 3.0);
//!
//! assert!(validate_measurement("radius", -2.0).is_err());
//! assert!("some string".parse::<Measurement>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{FigureError, FigureResult};

/// Field name used when a measurement is validated outside of a figure.
const ANONYMOUS_FIELD: &str = "measurement";

// =============================================================================
// Measurement Type
// =============================================================================

/// A strictly positive, finite length in centimeters.
///
/// The only way to obtain one is through [`validate_measurement`] (or the
/// conversions built on it), so figures storing `Measurement`s never need to
/// re-check positivity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Measurement(f64);

impl Measurement {
    /// Returns the raw value in centimeters.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the square of the value.
    #[inline]
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validates a raw value assigned to the measurement named `field`.
///
/// ## Rules
/// - Must be a number: `NaN` and infinities are rejected as non-numeric
/// - Must be strictly positive (> 0)
///
/// ## Example
/// ```rust
/// use area_core::{validate_measurement, FigureError};
///
/// assert!(validate_measurement("side1", 4.0).is_ok());
///
/// let err = validate_measurement("side1", 0.0).unwrap_err();
/// assert!(matches!(err, FigureError::InvalidMeasurement { .. }));
///
/// let err = validate_measurement("side1", f64::NAN).unwrap_err();
/// assert!(matches!(err, FigureError::TypeArgument { .. }));
/// ```
pub fn validate_measurement(field: &str, value: f64) -> FigureResult<Measurement> {
    if !value.is_finite() {
        debug!(field, value, "rejected non-numeric measurement");
        return Err(FigureError::TypeArgument {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        debug!(field, value, "rejected non-positive measurement");
        return Err(FigureError::InvalidMeasurement {
            field: field.to_string(),
            value,
        });
    }

    Ok(Measurement(value))
}

/// Validates an untyped JSON value assigned to the measurement named `field`.
///
/// Anything other than a JSON number (strings, booleans, null, arrays,
/// objects) is a type error, even if it looks numeric.
pub fn validate_json_measurement(field: &str, value: &Value) -> FigureResult<Measurement> {
    match value.as_f64() {
        Some(number) => validate_measurement(field, number),
        None => {
            debug!(field, %value, "rejected non-numeric JSON measurement");
            Err(FigureError::TypeArgument {
                field: field.to_string(),
            })
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl TryFrom<f64> for Measurement {
    type Error = FigureError;

    fn try_from(value: f64) -> FigureResult<Self> {
        validate_measurement(ANONYMOUS_FIELD, value)
    }
}

impl TryFrom<i64> for Measurement {
    type Error = FigureError;

    fn try_from(value: i64) -> FigureResult<Self> {
        validate_measurement(ANONYMOUS_FIELD, value as f64)
    }
}

impl TryFrom<&Value> for Measurement {
    type Error = FigureError;

    fn try_from(value: &Value) -> FigureResult<Self> {
        validate_json_measurement(ANONYMOUS_FIELD, value)
    }
}

impl From<Measurement> for f64 {
    fn from(measurement: Measurement) -> f64 {
        measurement.0
    }
}

/// Parses user text such as `"3"` or `" 2.5 "`.
impl FromStr for Measurement {
    type Err = FigureError;

    fn from_str(s: &str) -> FigureResult<Self> {
        let value: f64 = s.trim().parse().map_err(|_| {
            debug!(input = s, "rejected non-numeric measurement text");
            FigureError::TypeArgument {
                field: ANONYMOUS_FIELD.to_string(),
            }
        })?;
        validate_measurement(ANONYMOUS_FIELD, value)
    }
}

/// Prints the plain number: `3` for 3.0, `2.5` for 2.5.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
