//! Classifier Port - Interface for a fitted, read-only model.
//!
//! A classifier consumes a matrix of feature rows and returns, per row, one
//! integer code for each of its targets. Single-output models simply have a
//! single target.

/// Errors that can occur while invoking a classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("X has {actual} features, but the model expects {expected}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("model has no target named '{0}'")]
    MissingTarget(String),

    #[error("model returned no prediction")]
    EmptyPrediction,

    #[error("cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    #[error("got {labels} label rows for {samples} samples")]
    LabelCountMismatch { samples: usize, labels: usize },

    #[error("number of neighbors must be at least 1")]
    InvalidNeighbors,

    #[error("model is inconsistent: {0}")]
    Inconsistent(String),

    #[error("prediction failed: {0}")]
    Failed(String),
}

/// Port for a fitted classifier.
///
/// Implementations are loaded once and never mutated, so `predict` takes
/// `&self`.
pub trait Classifier: Send + Sync {
    /// Names of the input columns, in the order rows must follow.
    fn feature_names(&self) -> &[String];

    /// Names of the predicted columns, in the order of each output row.
    fn target_names(&self) -> &[String];

    /// Predicts one row of target codes per input row.
    ///
    /// # Errors
    /// Returns `ModelError::FeatureCount` if a row has the wrong width.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<i64>>, ModelError>;

    /// Position of `target` within each output row.
    fn target_index(&self, target: &str) -> Result<usize, ModelError> {
        self.target_names()
            .iter()
            .position(|name| name == target)
            .ok_or_else(|| ModelError::MissingTarget(target.to_string()))
    }
}
