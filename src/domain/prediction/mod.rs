//! Prediction procedures.
//!
//! Turn a completed questionnaire into model features, run the model and
//! decode the result. Models and encoders are injected at construction and
//! are read-only afterwards.

mod crop;
mod errors;
mod features;
mod fertilizer;

pub use crop::{CropRecommendation, CropRecommender, VARIETY};
pub use errors::PredictionError;
pub use features::{CropFeatures, FertilizerFeatures, FertilizerInputs};
pub use fertilizer::{FertilizerRecommendation, FertilizerRecommender, FERTILIZER_NAME};

use crate::domain::dialogue::{Answers, QuestionnaireKind};

/// Both recommenders, loaded once at start-up.
pub struct ModelSuite {
    pub crop: CropRecommender,
    pub fertilizer: FertilizerRecommender,
}

impl ModelSuite {
    pub fn new(crop: CropRecommender, fertilizer: FertilizerRecommender) -> Self {
        Self { crop, fertilizer }
    }

    /// Runs the procedure matching `kind` and renders its result lines.
    pub fn run(
        &self,
        kind: QuestionnaireKind,
        answers: &Answers,
    ) -> Result<Vec<String>, PredictionError> {
        match kind {
            QuestionnaireKind::Crop => self.crop.recommend(answers).map(|r| r.messages()),
            QuestionnaireKind::Fertilizer => {
                self.fertilizer.recommend(answers).map(|r| r.messages())
            }
        }
    }
}
