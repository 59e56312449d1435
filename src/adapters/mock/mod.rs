//! Mock adapters for tests and local experiments.

mod classifier;
mod sink;

pub use classifier::{FailingClassifier, FixedClassifier, PredictCalls};
pub use sink::RecordingSink;
