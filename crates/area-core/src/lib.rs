//! # area-core: Pure Figure Model
//!
//! This crate computes the area of simple geometric figures from validated
//! measurements. It contains no I/O: every function is a pure computation
//! over in-memory values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Area Calculator Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    area-cli (binary `area`)                     │   │
//! │  │        parse args ──► build figure ──► print area               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ area-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌─────────────┐   ┌─────────────────────┐  │   │
//! │  │   │ measurement │──►│   figure    │──►│      dispatch       │  │   │
//! │  │   │  validator  │   │   Circle    │   │  calc_area(&F)      │  │   │
//! │  │   │             │   │  Triangle   │   │  calc_area_value()  │  │   │
//! │  │   └─────────────┘   └─────────────┘   └─────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONCURRENCY • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - Validated positive measurement (radius, side length)
//! - [`figure`] - The `Figure` trait and the area rounding policy
//! - [`circle`] - Circle figure
//! - [`triangle`] - Triangle figure with group validation of its sides
//! - [`dispatch`] - Area calculation for any figure, typed or from JSON
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use area_core::{calc_area, Circle, Triangle};
//!
//! let circle = Circle::new(3.0).unwrap();
//! assert_eq!(calc_area(&circle), 28.27);
//!
//! let mut triangle = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
//! assert!(triangle.is_right_triangle());
//!
//! // A rejected assignment leaves the triangle untouched
//! assert!(triangle.set_side1(100.0).is_err());
//! assert_eq!(triangle.side1(), 3.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod circle;
pub mod dispatch;
pub mod error;
pub mod figure;
pub mod measurement;
pub mod triangle;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use area_core::Circle` instead of
// `use area_core::circle::Circle`

pub use circle::Circle;
pub use dispatch::{calc_area, calc_area_value, AnyFigure};
pub use error::{FigureError, FigureResult};
pub use figure::Figure;
pub use measurement::{validate_measurement, Measurement};
pub use triangle::{Side, Triangle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of decimal places every area is rounded to.
///
/// Fixed policy: areas are always reported with two decimals.
pub const AREA_DECIMALS: i32 = 2;

/// Unit every measurement is expressed in.
pub const MEASUREMENT_UNIT: &str = "cm";
