//! Offline training.
//!
//! Builds the JSON model and encoder artifacts the bot loads at start-up
//! from a CSV dataset.

mod dataset;
mod error;
mod plan;
mod trainer;

pub use dataset::Dataset;
pub use error::TrainingError;
pub use plan::{ColumnKind, FeatureColumn, TrainingPlan};
pub use trainer::{train, TrainedArtifacts};
