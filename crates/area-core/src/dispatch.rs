//! # Area Dispatch
//!
//! Computes the area of any figure without knowing its concrete kind.
//!
//! ## Two Entry Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Typed input                          Untyped input (JSON)              │
//! │  ───────────                          ────────────────────              │
//! │  calc_area(&impl Figure)              calc_area_value(&Value)           │
//! │       │                                    │                            │
//! │       │                                    ▼                            │
//! │       │                               AnyFigure::from_value             │
//! │       │                                    │                            │
//! │       │                                    ├── not a figure?            │
//! │       │                                    │     → UnsupportedFigure    │
//! │       │                                    ▼                            │
//! │       └──────────────► Figure::area() ◄────┘                            │
//! │                                                                         │
//! │  Non-figures are rejected at compile time on the typed path and at     │
//! │  runtime on the JSON path.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accepted JSON Shapes
//! ```json
//! { "kind": "circle",   "radius": 3 }
//! { "kind": "triangle", "sides": [5] }
//! { "kind": "triangle", "sides": [3, 4, 5] }
//! { "kind": "triangle", "side1": 3, "side2": 4, "side3": 5 }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace};

use crate::circle::Circle;
use crate::error::{FigureError, FigureResult};
use crate::figure::Figure;
use crate::measurement::validate_json_measurement;
use crate::triangle::{Side, Triangle};

// =============================================================================
// Typed Dispatch
// =============================================================================

/// Calculates the area of any figure.
///
/// Accepts concrete figures as well as trait objects.
///
/// ## Example
/// ```rust
/// use area_core::{calc_area, Circle, Figure, Triangle};
///
/// assert_eq!(calc_area(&Circle::new(3.0).unwrap()), 28.27);
///
/// let figures: Vec<Box<dyn Figure>> = vec![
///     Box::new(Circle::new(1.0).unwrap()),
///     Box::new(Triangle::from_sides(3.0, 4.0, 5.0).unwrap()),
/// ];
/// let areas: Vec<f64> = figures.iter().map(|f| calc_area(f.as_ref())).collect();
/// assert_eq!(areas, vec![3.14, 6.0]);
/// ```
pub fn calc_area<F: Figure + ?Sized>(figure: &F) -> f64 {
    let area = figure.area();
    trace!(kind = figure.kind(), area, "dispatched area calculation");
    area
}

/// Calculates the area of a figure described by untyped JSON.
///
/// ## Example
/// ```rust
/// use area_core::{calc_area_value, FigureError};
/// use serde_json::json;
///
/// let area = calc_area_value(&json!({ "kind": "circle", "radius": 3 })).unwrap();
/// assert_eq!(area, 28.27);
///
/// let err = calc_area_value(&json!([1, 2, 3])).unwrap_err();
/// assert_eq!(err, FigureError::UnsupportedFigure);
/// ```
pub fn calc_area_value(value: &Value) -> FigureResult<f64> {
    let figure = AnyFigure::from_value(value)?;
    Ok(calc_area(&figure))
}

// =============================================================================
// AnyFigure
// =============================================================================

/// Any supported figure, as produced from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyFigure {
    Circle(Circle),
    Triangle(Triangle),
}

impl AnyFigure {
    /// Builds a figure from a JSON object tagged by `"kind"`.
    ///
    /// ## Errors
    /// - `UnsupportedFigure` if the value is not an object with a known kind
    /// - measurement and triangle errors for a recognised but invalid figure
    pub fn from_value(value: &Value) -> FigureResult<Self> {
        let Some(object) = value.as_object() else {
            debug!(%value, "rejected non-object figure");
            return Err(FigureError::UnsupportedFigure);
        };

        match object.get("kind").and_then(Value::as_str) {
            Some("circle") => circle_from_object(object).map(AnyFigure::Circle),
            Some("triangle") => triangle_from_object(object).map(AnyFigure::Triangle),
            kind => {
                debug!(?kind, "rejected unknown figure kind");
                Err(FigureError::UnsupportedFigure)
            }
        }
    }
}

fn circle_from_object(object: &Map<String, Value>) -> FigureResult<Circle> {
    let radius = validate_json_measurement("radius", field_or_null(object, "radius"))?;
    Ok(Circle::from_measurement(radius))
}

fn triangle_from_object(object: &Map<String, Value>) -> FigureResult<Triangle> {
    match object.get("sides") {
        Some(Value::Array(values)) => {
            if values.len() != 1 && values.len() != 3 {
                return Err(FigureError::ArgumentCount {
                    given: values.len(),
                });
            }

            let sides = values
                .iter()
                .zip(Side::ALL)
                .map(|(value, side)| {
                    value.as_f64().ok_or_else(|| FigureError::TypeArgument {
                        field: side.field().to_string(),
                    })
                })
                .collect::<FigureResult<Vec<f64>>>()?;

            Triangle::new(&sides)
        }
        Some(_) => Err(FigureError::TypeArgument {
            field: "sides".to_string(),
        }),
        None => {
            let [side1, side2, side3] = Side::ALL;
            Triangle::from_measurements([
                validate_json_measurement(side1.field(), field_or_null(object, side1.field()))?,
                validate_json_measurement(side2.field(), field_or_null(object, side2.field()))?,
                validate_json_measurement(side3.field(), field_or_null(object, side3.field()))?,
            ])
        }
    }
}

static NULL: Value = Value::Null;

/// A missing field is treated like `null`, i.e. a non-numeric measurement.
fn field_or_null<'a>(object: &'a Map<String, Value>, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&NULL)
}

impl TryFrom<&Value> for AnyFigure {
    type Error = FigureError;

    fn try_from(value: &Value) -> FigureResult<Self> {
        AnyFigure::from_value(value)
    }
}

impl From<Circle> for AnyFigure {
    fn from(circle: Circle) -> Self {
        AnyFigure::Circle(circle)
    }
}

impl From<Triangle> for AnyFigure {
    fn from(triangle: Triangle) -> Self {
        AnyFigure::Triangle(triangle)
    }
}

impl Figure for AnyFigure {
    fn kind(&self) -> &'static str {
        match self {
            AnyFigure::Circle(circle) => circle.kind(),
            AnyFigure::Triangle(triangle) => triangle.kind(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            AnyFigure::Circle(circle) => circle.area(),
            AnyFigure::Triangle(triangle) => triangle.area(),
        }
    }
}

impl fmt::Display for AnyFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyFigure::Circle(circle) => fmt::Display::fmt(circle, f),
            AnyFigure::Triangle(triangle) => fmt::Display::fmt(triangle, f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
