//! Error abstractions.

use thiserror::Error;

/// Application error variants.
#[derive(Debug, Error)]
pub enum AppError {
    /// The given input was invalid.
    #[error("validation error: {0}")]
    InvalidInput(String),
    /// Serializing a manifest to YAML failed.
    #[error("error serializing manifest to YAML: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
