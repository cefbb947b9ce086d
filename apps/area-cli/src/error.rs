//! Error types for the command-line app.

use area_core::FigureError;

use crate::config::ConfigError;

/// Errors reported to the user on stderr.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Figure(#[from] FigureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid figure JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Figure(err) => err.kind(),
            CliError::Config(_) => "CONFIG",
            CliError::InvalidJson(_) => "INVALID_JSON",
            CliError::Render(_) => "RENDER",
            CliError::Usage(_) => "USAGE",
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
