//! Prediction error types.

use thiserror::Error;

use crate::ports::{EncodingError, ModelError};

/// Why a prediction procedure failed.
///
/// Every variant is recoverable: the dialogue reports it as one message and
/// returns to the main menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("missing value for {field}")]
    MissingField { field: String },

    #[error("could not convert string to float: '{value}' ({field})")]
    InvalidNumber { field: String, value: String },

    #[error("{field} must be a finite number, got '{value}'")]
    NonFiniteNumber { field: String, value: String },

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl PredictionError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn non_finite(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonFiniteNumber {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_quotes_raw_value() {
        let err = PredictionError::invalid_number("Humidity", "damp");
        assert_eq!(
            err.to_string(),
            "could not convert string to float: 'damp' (Humidity)"
        );
    }

    #[test]
    fn encoding_errors_pass_through_unchanged() {
        let inner = EncodingError::MissingColumn("Crop".to_string());
        let err = PredictionError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
