//! Mock classifiers for testing.
//!
//! `FixedClassifier` returns the same code row for every input and records
//! what it was asked, so tests can check feature order. `FailingClassifier`
//! always errors.

use std::sync::{Arc, Mutex};

use crate::ports::{Classifier, ModelError};

/// Rows passed to each `predict` call, in call order.
pub type PredictCalls = Arc<Mutex<Vec<Vec<Vec<f64>>>>>;

/// Classifier that answers every row with a fixed code row.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    features: Vec<String>,
    targets: Vec<String>,
    output: Vec<i64>,
    calls: PredictCalls,
}

impl FixedClassifier {
    /// Creates a classifier expecting `feature_count` columns.
    pub fn new(feature_count: usize, targets: Vec<&str>, output: Vec<i64>) -> Self {
        Self {
            features: (0..feature_count).map(|i| format!("f{}", i)).collect(),
            targets: targets.into_iter().map(String::from).collect(),
            output,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the call history.
    pub fn calls(&self) -> PredictCalls {
        Arc::clone(&self.calls)
    }
}

impl Classifier for FixedClassifier {
    fn feature_names(&self) -> &[String] {
        &self.features
    }

    fn target_names(&self) -> &[String] {
        &self.targets
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<i64>>, ModelError> {
        if let Some(row) = rows.iter().find(|row| row.len() != self.features.len()) {
            return Err(ModelError::FeatureCount {
                expected: self.features.len(),
                actual: row.len(),
            });
        }
        self.calls
            .lock()
            .map_err(|e| ModelError::Failed(e.to_string()))?
            .push(rows.to_vec());
        Ok(vec![self.output.clone(); rows.len()])
    }
}

/// Classifier whose every prediction fails.
#[derive(Debug, Clone)]
pub struct FailingClassifier {
    message: String,
    targets: Vec<String>,
}

impl FailingClassifier {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            targets: vec![
                "Crop".to_string(),
                "Soil_Type".to_string(),
                "Variety".to_string(),
                "FertilizerName".to_string(),
            ],
        }
    }
}

impl Classifier for FailingClassifier {
    fn feature_names(&self) -> &[String] {
        &[]
    }

    fn target_names(&self) -> &[String] {
        &self.targets
    }

    fn predict(&self, _rows: &[Vec<f64>]) -> Result<Vec<Vec<i64>>, ModelError> {
        Err(ModelError::Failed(self.message.clone()))
    }
}
