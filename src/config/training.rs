//! Offline training configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Training configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrainingConfig {
    /// Fraction of rows held out for the accuracy report
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,

    /// Seed for the train/test shuffle
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Neighbours consulted per prediction
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,
}

impl TrainingConfig {
    /// Validate training configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(ValidationError::InvalidTestRatio(self.test_ratio));
        }
        if self.neighbors == 0 {
            return Err(ValidationError::InvalidNeighbors);
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
            seed: default_seed(),
            neighbors: default_neighbors(),
        }
    }
}

fn default_test_ratio() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_neighbors() -> usize {
    5
}
