//! # Commands
//!
//! Argument parsing and execution for the `area` binary.
//!
//! ## Usage
//! ```text
//! area [--json] circle <radius>
//! area [--json] triangle <side> | <side1> <side2> <side3>
//! area [--json] json '<figure object>'
//! area help
//! ```

use area_core::{AnyFigure, Circle, Figure, FigureError, Triangle, MEASUREMENT_UNIT};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Usage:
  area [--json] circle <radius>
  area [--json] triangle <side> | <side1> <side2> <side3>
  area [--json] json '<figure object>'
  area help";

// =============================================================================
// Parsing
// =============================================================================

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Circle { radius: String },
    Triangle { sides: Vec<String> },
    Json { document: String },
    Help,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    /// `--json` given on the command line
    pub json: bool,
}

/// Parses arguments (without the program name).
pub fn parse_args(args: &[String]) -> CliResult<Invocation> {
    let json = args.iter().any(|arg| arg == "--json");
    let mut rest = args.iter().filter(|arg| *arg != "--json");

    let command = match rest.next().map(String::as_str) {
        None | Some("help") | Some("--help") | Some("-h") => Command::Help,
        Some("circle") => {
            let values: Vec<String> = rest.cloned().collect();
            match values.as_slice() {
                [radius] => Command::Circle {
                    radius: radius.clone(),
                },
                _ => {
                    return Err(CliError::Usage(format!(
                        "circle takes exactly one radius, got {}",
                        values.len()
                    )))
                }
            }
        }
        Some("triangle") => Command::Triangle {
            sides: rest.cloned().collect(),
        },
        Some("json") => {
            let parts: Vec<String> = rest.cloned().collect();
            if parts.is_empty() {
                return Err(CliError::Usage("json requires a figure object".to_string()));
            }
            Command::Json {
                document: parts.join(" "),
            }
        }
        Some(other) => {
            return Err(CliError::Usage(format!("unknown figure '{other}'")));
        }
    };

    Ok(Invocation { command, json })
}

/// Reads a command-line token as a number for the named field.
fn parse_number(field: &str, token: &str) -> Result<f64, FigureError> {
    token.trim().parse().map_err(|_| FigureError::TypeArgument {
        field: field.to_string(),
    })
}

// =============================================================================
// Report
// =============================================================================

/// Result of one area calculation, as printed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub figure: AnyFigure,
    pub description: String,
    pub area: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_right_triangle: Option<bool>,
}

impl AreaReport {
    pub fn new(figure: AnyFigure) -> Self {
        let (perimeter, is_right_triangle) = match figure {
            AnyFigure::Triangle(triangle) => {
                (Some(triangle.perimeter()), Some(triangle.is_right_triangle()))
            }
            AnyFigure::Circle(_) => (None, None),
        };

        AreaReport {
            figure,
            description: figure.to_string(),
            area: area_core::calc_area(&figure),
            unit: format!("{MEASUREMENT_UNIT}²"),
            perimeter,
            is_right_triangle,
        }
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = format!("{}\nArea: {} {}", self.description, self.area, self.unit);
                if let Some(perimeter) = self.perimeter {
                    out.push_str(&format!("\nPerimeter: {perimeter} {MEASUREMENT_UNIT}"));
                }
                if let Some(right) = self.is_right_triangle {
                    out.push_str(if right {
                        "\nRight triangle: yes"
                    } else {
                        "\nRight triangle: no"
                    });
                }
                Ok(out)
            }
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Builds the figure a command describes.
pub fn build_figure(command: &Command) -> CliResult<Option<AnyFigure>> {
    let figure: AnyFigure = match command {
        Command::Help => return Ok(None),
        Command::Circle { radius } => Circle::new(parse_number("radius", radius)?)?.into(),
        Command::Triangle { sides } => {
            let values = sides
                .iter()
                .enumerate()
                .map(|(i, token)| parse_number(&format!("side{}", i + 1), token))
                .collect::<Result<Vec<f64>, FigureError>>()?;
            Triangle::new(&values)?.into()
        }
        Command::Json { document } => {
            let value: Value = serde_json::from_str(document).map_err(CliError::InvalidJson)?;
            AnyFigure::from_value(&value)?
        }
    };

    Ok(Some(figure))
}

/// Runs one invocation and returns the text to print on stdout.
pub fn run(args: &[String], config: &CliConfig) -> CliResult<String> {
    let invocation = parse_args(args)?;
    debug!(?invocation, "parsed arguments");

    let format = if invocation.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let Some(figure) = build_figure(&invocation.command)? else {
        return Ok(USAGE.to_string());
    };

    let report = AreaReport::new(figure);
    info!(kind = figure.kind(), area = report.area, "calculated area");
    report.render(format)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn text_config() -> CliConfig {
        CliConfig::default()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_args(&args(&[])).unwrap().command, Command::Help);
        assert_eq!(
            parse_args(&args(&["circle", "3"])).unwrap().command,
            Command::Circle {
                radius: "3".to_string()
            }
        );

        let invocation = parse_args(&args(&["--json", "triangle", "3", "4", "5"])).unwrap();
        assert!(invocation.json);
        assert_eq!(
            invocation.command,
            Command::Triangle {
                sides: args(&["3", "4", "5"])
            }
        );
    }

    #[test]
    fn test_parse_usage_errors() {
        assert!(matches!(
            parse_args(&args(&["square", "2"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&args(&["circle", "1", "2"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(parse_args(&args(&["json"])), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_run_circle_text() {
        let out = run(&args(&["circle", "3"]), &text_config()).unwrap();
        assert_eq!(out, "Circle with a radius of 3 cm.\nArea: 28.27 cm²");
    }

    #[test]
    fn test_run_triangle_text() {
        let out = run(&args(&["triangle", "3", "4", "5"]), &text_config()).unwrap();
        assert_eq!(
            out,
            "Triangle with sides 3 cm, 4 cm, 5 cm.\nArea: 6 cm²\nPerimeter: 12 cm\nRight triangle: yes"
        );
    }

    #[test]
    fn test_run_triangle_json() {
        let out = run(&args(&["--json", "triangle", "5"]), &text_config()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["area"], serde_json::json!(10.83));
        assert_eq!(value["perimeter"], serde_json::json!(15.0));
        assert_eq!(value["is_right_triangle"], serde_json::json!(false));
        assert_eq!(value["figure"]["kind"], serde_json::json!("triangle"));
    }

    #[test]
    fn test_config_selects_json_output() {
        let config = CliConfig {
            output: OutputFormat::Json,
            log_filter: None,
        };
        let out = run(&args(&["circle", "1"]), &config).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["area"], serde_json::json!(3.14));
        assert!(value.get("is_right_triangle").is_none());
        assert!(value.get("perimeter").is_none());
    }

    #[test]
    fn test_run_json_document() {
        let out = run(
            &args(&["json", r#"{"kind": "circle", "radius": 3}"#]),
            &text_config(),
        )
        .unwrap();
        assert!(out.ends_with("Area: 28.27 cm²"));

        let err = run(&args(&["json", "[1, 2, 3]"]), &text_config()).unwrap_err();
        assert!(matches!(err, CliError::Figure(FigureError::UnsupportedFigure)));

        let err = run(&args(&["json", "{not json"]), &text_config()).unwrap_err();
        assert_eq!(err.code(), "INVALID_JSON");
    }

    #[test]
    fn test_run_reports_figure_errors() {
        let err = run(&args(&["circle", "some string"]), &text_config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Figure(FigureError::TypeArgument { ref field }) if field == "radius"
        ));

        let err = run(&args(&["triangle", "3", "4"]), &text_config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Figure(FigureError::ArgumentCount { given: 2 })
        ));

        let err = run(&args(&["triangle", "1", "2", "3"]), &text_config()).unwrap_err();
        assert_eq!(err.to_string(), "Triangle with these sides cannot exist");

        let err = run(&args(&["circle", "-2"]), &text_config()).unwrap_err();
        assert_eq!(err.to_string(), "Measurement must be positive.");
    }

    #[test]
    fn test_help() {
        assert_eq!(run(&args(&["help"]), &text_config()).unwrap(), USAGE);
    }
}
