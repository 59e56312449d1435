//! Crop prediction procedure.

use tracing::debug;

use super::{CropFeatures, PredictionError};
use crate::domain::dialogue::{field, Answers};
use crate::ports::{Classifier, LabelEncoders, ModelError};

/// Target column holding the recommended crop variety.
pub const VARIETY: &str = "Variety";

/// Soil type and variety suggested for a set of field conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropRecommendation {
    pub soil_type: String,
    pub variety: String,
}

impl CropRecommendation {
    /// The two lines shown to the user.
    pub fn messages(&self) -> Vec<String> {
        vec![
            format!("✅ Suitable Soil Type: {}", self.soil_type),
            format!("🌾 Recommended Crop Variety: {}", self.variety),
        ]
    }
}

/// Runs the crop classifier over collected answers.
///
/// The model may predict more targets than soil type and variety (it is
/// trained on Crop as well); only those two are decoded.
pub struct CropRecommender {
    classifier: Box<dyn Classifier>,
    encoders: Box<dyn LabelEncoders>,
}

impl CropRecommender {
    pub fn new(classifier: Box<dyn Classifier>, encoders: Box<dyn LabelEncoders>) -> Self {
        Self { classifier, encoders }
    }

    /// Parses, predicts and decodes.
    ///
    /// # Errors
    /// Any parse, model or decoding failure aborts the whole procedure.
    pub fn recommend(&self, answers: &Answers) -> Result<CropRecommendation, PredictionError> {
        let features = CropFeatures::from_answers(answers)?;
        let soil_index = self.classifier.target_index(field::SOIL_TYPE)?;
        let variety_index = self.classifier.target_index(VARIETY)?;

        let prediction = self
            .classifier
            .predict(&[features.to_row()])?
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyPrediction)?;
        debug!(?features, ?prediction, "crop model prediction");

        let code_at = |index: usize| {
            prediction
                .get(index)
                .copied()
                .ok_or(ModelError::EmptyPrediction)
        };
        let soil_type = self.encoders.decode(field::SOIL_TYPE, code_at(soil_index)?)?;
        let variety = self.encoders.decode(VARIETY, code_at(variety_index)?)?;

        Ok(CropRecommendation { soil_type, variety })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FailingClassifier, FixedClassifier};
    use crate::adapters::models::{EncoderSet, FittedLabelEncoder};
    use crate::ports::EncodingError;

    fn answers() -> Answers {
        [
            ("Nitrogen", "10"),
            ("Phosphorus", "20"),
            ("Potassium", "15"),
            ("Temperature", "25"),
            ("Humidity", "70"),
            ("pH_Value", "6.5"),
            ("Rainfall", "200"),
        ]
        .into_iter()
        .collect()
    }

    fn encoders() -> Box<EncoderSet> {
        let mut set = EncoderSet::new();
        set.insert(FittedLabelEncoder::fit("Crop", ["Rice", "Wheat"]));
        set.insert(FittedLabelEncoder::fit("Soil_Type", ["Clayey", "Loamy", "Sandy"]));
        set.insert(FittedLabelEncoder::fit("Variety", ["Basmati", "Durum", "Jasmine"]));
        Box::new(set)
    }

    fn crop_targets() -> Vec<&'static str> {
        vec!["Crop", "Soil_Type", "Variety"]
    }

    #[test]
    fn decodes_soil_type_and_variety_by_target_name() {
        let classifier = FixedClassifier::new(7, crop_targets(), vec![1, 2, 0]);
        let recommender = CropRecommender::new(Box::new(classifier), encoders());

        let recommendation = recommender.recommend(&answers()).unwrap();

        assert_eq!(
            recommendation,
            CropRecommendation {
                soil_type: "Sandy".to_string(),
                variety: "Basmati".to_string(),
            }
        );
    }

    #[test]
    fn emits_two_messages() {
        let recommendation = CropRecommendation {
            soil_type: "Loamy".to_string(),
            variety: "Durum".to_string(),
        };
        assert_eq!(
            recommendation.messages(),
            vec![
                "✅ Suitable Soil Type: Loamy".to_string(),
                "🌾 Recommended Crop Variety: Durum".to_string(),
            ]
        );
    }

    #[test]
    fn sends_features_in_training_order() {
        let classifier = FixedClassifier::new(7, crop_targets(), vec![0, 0, 0]);
        let calls = classifier.calls();
        let recommender = CropRecommender::new(Box::new(classifier), encoders());

        recommender.recommend(&answers()).unwrap();

        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[vec![vec![10.0, 20.0, 15.0, 25.0, 70.0, 6.5, 200.0]]]
        );
    }

    #[test]
    fn parse_failure_skips_the_model() {
        let classifier = FixedClassifier::new(7, crop_targets(), vec![0, 0, 0]);
        let calls = classifier.calls();
        let recommender = CropRecommender::new(Box::new(classifier), encoders());

        let err = recommender
            .recommend(&answers().with("pH_Value", "acidic"))
            .unwrap_err();

        assert_eq!(err, PredictionError::invalid_number("pH_Value", "acidic"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_code_fails_decoding() {
        let classifier = FixedClassifier::new(7, crop_targets(), vec![0, 9, 0]);
        let recommender = CropRecommender::new(Box::new(classifier), encoders());

        let err = recommender.recommend(&answers()).unwrap_err();

        assert!(matches!(
            err,
            PredictionError::Encoding(EncodingError::UnknownCode { code: 9, .. })
        ));
    }

    #[test]
    fn model_without_variety_target_is_rejected() {
        let classifier = FixedClassifier::new(7, vec!["Soil_Type"], vec![0]);
        let recommender = CropRecommender::new(Box::new(classifier), encoders());

        assert_eq!(
            recommender.recommend(&answers()),
            Err(PredictionError::Model(ModelError::MissingTarget("Variety".to_string())))
        );
    }

    #[test]
    fn model_failure_is_reported() {
        let recommender = CropRecommender::new(
            Box::new(FailingClassifier::new("weights corrupted")),
            encoders(),
        );

        let err = recommender.recommend(&answers()).unwrap_err();

        assert_eq!(err.to_string(), "prediction failed: weights corrupted");
    }
}
