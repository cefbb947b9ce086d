//! # Error Types
//!
//! Domain-specific error types for area-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  area-core errors (this file)                                          │
//! │  └── FigureError                                                        │
//! │      ├── TypeArgument        - value is not a number                   │
//! │      ├── InvalidMeasurement  - number is not positive                  │
//! │      ├── InvalidTriangle     - sides break the triangle inequality     │
//! │      ├── ArgumentCount       - triangle built from 2, 4, ... sides     │
//! │      └── UnsupportedFigure   - dynamic input is not a figure           │
//! │                                                                         │
//! │  area-cli errors (separate crate)                                      │
//! │  └── CliError        - what the user sees on stderr                    │
//! │                                                                         │
//! │  Flow: FigureError → CliError → stderr + exit code                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Keep context (field name, offending value) in the variant
//! 3. Messages are stable; callers may show them verbatim

use thiserror::Error;

// =============================================================================
// Figure Error
// =============================================================================

/// Errors raised while building, mutating or dispatching figures.
///
/// All errors are raised synchronously at the offending call and are never
/// retried: they describe bad input, not transient failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    /// A measurement value is not numeric.
    ///
    /// ## When This Occurs
    /// - `f64` input is `NaN` or infinite
    /// - String input does not parse as a number
    /// - JSON input is not a number (`"3"`, `null`, `[3]`)
    #[error("Only numeric values are accepted.")]
    TypeArgument { field: String },

    /// A measurement is numeric but zero or negative.
    #[error("Measurement must be positive.")]
    InvalidMeasurement { field: String, value: f64 },

    /// A complete set of three sides fails the strict triangle inequality.
    ///
    /// ## User Workflow
    /// ```text
    /// Triangle(3, 4, 5)
    ///      │
    ///      ▼
    /// set_side1(100) → 4 + 5 > 100? NO
    ///      │
    ///      ▼
    /// InvalidTriangle { sides: [100, 4, 5] }, triangle still (3, 4, 5)
    /// ```
    #[error("Triangle with these sides cannot exist")]
    InvalidTriangle { sides: [f64; 3] },

    /// Triangle constructed with neither one nor three side lengths.
    #[error("Triangle requires either one or three side lengths")]
    ArgumentCount { given: usize },

    /// Dynamic input does not describe a figure with an area.
    #[error("Figure object must have an area method.")]
    UnsupportedFigure,
}

impl FigureError {
    /// Machine-readable error code, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            FigureError::TypeArgument { .. } => "TYPE_ARGUMENT",
            FigureError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            FigureError::InvalidTriangle { .. } => "INVALID_TRIANGLE",
            FigureError::ArgumentCount { .. } => "ARGUMENT_COUNT",
            FigureError::UnsupportedFigure => "UNSUPPORTED_FIGURE",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FigureError.
pub type FigureResult<T> = Result<T, FigureError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FigureError::TypeArgument {
            field: "radius".to_string(),
        };
        assert_eq!(err.to_string(), "Only numeric values are accepted.");

        let err = FigureError::InvalidMeasurement {
            field: "side1".to_string(),
            value: -5.0,
        };
        assert_eq!(err.to_string(), "Measurement must be positive.");

        let err = FigureError::InvalidTriangle {
            sides: [100.0, 4.0, 5.0],
        };
        assert_eq!(err.to_string(), "Triangle with these sides cannot exist");

        let err = FigureError::ArgumentCount { given: 2 };
        assert_eq!(
            err.to_string(),
            "Triangle requires either one or three side lengths"
        );

        assert_eq!(
            FigureError::UnsupportedFigure.to_string(),
            "Figure object must have an area method."
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(FigureError::UnsupportedFigure.kind(), "UNSUPPORTED_FIGURE");
        assert_eq!(
            FigureError::ArgumentCount { given: 4 }.kind(),
            "ARGUMENT_COUNT"
        );
    }
}
