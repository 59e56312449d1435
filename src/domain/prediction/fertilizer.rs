//! Fertilizer recommendation procedure.

use tracing::debug;

use super::{FertilizerInputs, PredictionError};
use crate::domain::dialogue::Answers;
use crate::ports::{Classifier, LabelEncoders, ModelError};

/// Target column holding the fertilizer name.
pub const FERTILIZER_NAME: &str = "FertilizerName";

/// Fertilizer suggested for a set of field conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
}

impl FertilizerRecommendation {
    pub fn messages(&self) -> Vec<String> {
        vec![format!("💡 Recommended Fertilizer: {}", self.fertilizer)]
    }
}

/// Runs the fertilizer classifier over collected answers.
pub struct FertilizerRecommender {
    classifier: Box<dyn Classifier>,
    encoders: Box<dyn LabelEncoders>,
}

impl FertilizerRecommender {
    pub fn new(classifier: Box<dyn Classifier>, encoders: Box<dyn LabelEncoders>) -> Self {
        Self { classifier, encoders }
    }

    /// Parses, encodes, predicts and decodes.
    ///
    /// # Errors
    /// Any parse, encoding, model or decoding failure aborts the procedure.
    pub fn recommend(
        &self,
        answers: &Answers,
    ) -> Result<FertilizerRecommendation, PredictionError> {
        let features = FertilizerInputs::from_answers(answers)?.encode(self.encoders.as_ref())?;
        let target = self.classifier.target_index(FERTILIZER_NAME)?;

        let code = self
            .classifier
            .predict(&[features.to_row()])?
            .into_iter()
            .next()
            .and_then(|row| row.get(target).copied())
            .ok_or(ModelError::EmptyPrediction)?;
        debug!(?features, code, "fertilizer model prediction");

        let fertilizer = self.encoders.decode(FERTILIZER_NAME, code)?;
        Ok(FertilizerRecommendation { fertilizer })
    }
}
