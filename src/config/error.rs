//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),

    #[error("Catalog data directory must not be empty")]
    EmptyDataDir,

    #[error("max_alternatives must be at least 1")]
    ZeroMaxAlternatives,

    #[error("learning_min_samples must be at least 1")]
    ZeroMinSamples,

    #[error("learning_confidence_threshold must be in (0, 1], got {0}")]
    InvalidConfidenceThreshold(f64),
}
