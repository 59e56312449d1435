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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Test ratio must be between 0 and 1 (exclusive), got {0}")]
    InvalidTestRatio(f64),

    #[error("Number of neighbors must be at least 1")]
    InvalidNeighbors,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
