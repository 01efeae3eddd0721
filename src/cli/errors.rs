use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid bounds: {bounds}. Expected WIDTHxHEIGHT, e.g. 960x960")]
    InvalidBounds { bounds: String },

    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}
