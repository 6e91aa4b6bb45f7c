//! Error types for the temperature-heatmap crates.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart building and rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Dataset Errors ===
    #[error("Dataset contains no observations")]
    EmptyDataset,

    #[error("Invalid observation at index {index}: month {month} out of range 1-12")]
    InvalidMonth { index: usize, month: u32 },

    #[error("Failed to decode dataset: {0}")]
    DecodeError(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::DecodeError(err.to_string())
    }
}
