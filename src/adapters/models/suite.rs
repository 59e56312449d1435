//! Start-up loading of the model artifacts.

use tracing::info;

use super::{ArtifactError, EncoderSet, NearestNeighbors};
use crate::config::ModelPaths;
use crate::domain::prediction::{CropRecommender, FertilizerRecommender, ModelSuite};
use crate::ports::Classifier;

/// Loads the crop model and its encoders.
pub fn load_crop_recommender(paths: &ModelPaths) -> Result<CropRecommender, ArtifactError> {
    let model = NearestNeighbors::load(&paths.crop_model)?;
    let encoders = EncoderSet::load(&paths.crop_encoders)?;
    info!(
        model = %paths.crop_model.display(),
        targets = ?model.target_names(),
        samples = model.sample_count(),
        "loaded crop model"
    );
    Ok(CropRecommender::new(Box::new(model), Box::new(encoders)))
}

/// Loads the fertilizer model and its encoders.
pub fn load_fertilizer_recommender(
    paths: &ModelPaths,
) -> Result<FertilizerRecommender, ArtifactError> {
    let model = NearestNeighbors::load(&paths.fertilizer_model)?;
    let encoders = EncoderSet::load(&paths.fertilizer_encoders)?;
    info!(
        model = %paths.fertilizer_model.display(),
        samples = model.sample_count(),
        "loaded fertilizer model"
    );
    Ok(FertilizerRecommender::new(Box::new(model), Box::new(encoders)))
}

/// Loads all four artifacts. Called once, before the bot is built.
pub fn load_model_suite(paths: &ModelPaths) -> Result<ModelSuite, ArtifactError> {
    Ok(ModelSuite::new(
        load_crop_recommender(paths)?,
        load_fertilizer_recommender(paths)?,
    ))
}
