//! Error types for page-template-filters.

use thiserror::Error;

/// Main error type for page-template-filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A module export failed to construct its filter
    #[error("Failed to construct filter '{type_name}' from module '{module}': {message}")]
    Construction {
        module: String,
        type_name: String,
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
