//! Error types for route table loading and configuration

use thiserror::Error;

/// Route access errors
///
/// Filtering and committing never fail; these only surface while loading
/// route tables or reading configuration.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two siblings share the same path
    #[error("Duplicate route path '{path}' under '{parent}'")]
    DuplicatePath { parent: String, path: String },

    /// Route tree nests deeper than allowed
    #[error("Route '{path}' exceeds maximum depth of {max_depth}")]
    DepthExceeded { path: String, max_depth: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for route access operations
pub type Result<T> = std::result::Result<T, RouteError>;
