//! Model artifact locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Paths of the four persisted artifacts
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModelPaths {
    /// Crop classifier (predicts Crop, Soil_Type, Variety)
    #[serde(default = "default_crop_model")]
    pub crop_model: PathBuf,

    /// Crop label encoders keyed by column
    #[serde(default = "default_crop_encoders")]
    pub crop_encoders: PathBuf,

    /// Fertilizer classifier (predicts FertilizerName)
    #[serde(default = "default_fertilizer_model")]
    pub fertilizer_model: PathBuf,

    /// Fertilizer label encoders keyed by column
    #[serde(default = "default_fertilizer_encoders")]
    pub fertilizer_encoders: PathBuf,
}

impl ModelPaths {
    /// Validate artifact paths
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (&self.crop_model, "MODELS__CROP_MODEL"),
            (&self.crop_encoders, "MODELS__CROP_ENCODERS"),
            (&self.fertilizer_model, "MODELS__FERTILIZER_MODEL"),
            (&self.fertilizer_encoders, "MODELS__FERTILIZER_ENCODERS"),
        ];
        for (path, name) in required {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired(name));
            }
        }
        Ok(())
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            crop_model: default_crop_model(),
            crop_encoders: default_crop_encoders(),
            fertilizer_model: default_fertilizer_model(),
            fertilizer_encoders: default_fertilizer_encoders(),
        }
    }
}

fn default_crop_model() -> PathBuf {
    PathBuf::from("artifacts/crop_model.json")
}

fn default_crop_encoders() -> PathBuf {
    PathBuf::from("artifacts/crop_label_encoders.json")
}

fn default_fertilizer_model() -> PathBuf {
    PathBuf::from("artifacts/fertilizer_model.json")
}

fn default_fertilizer_encoders() -> PathBuf {
    PathBuf::from("artifacts/fertilizer_label_encoders.json")
}
