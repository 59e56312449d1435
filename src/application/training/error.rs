//! Training error types.

use thiserror::Error;

use crate::adapters::models::ArtifactError;
use crate::ports::{EncodingError, ModelError};

/// Errors that can occur while building a model from a dataset.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no column '{0}'")]
    MissingColumn(String),

    #[error("line {line}: could not convert '{value}' in {column} to a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("need at least 2 rows to train and evaluate, found {0}")]
    TooFewRows(usize),

    #[error("encoded table has an invalid shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
