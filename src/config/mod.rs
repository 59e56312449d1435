//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `AGRO_AID` prefix and
//! nested values are separated by double underscores. Every value has a
//! default, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use agro_aid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Crop model at {}", config.models.crop_model.display());
//! ```

mod error;
mod logging;
mod models;
mod training;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use models::ModelPaths;
pub use training::TrainingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Model artifact locations
    #[serde(default)]
    pub models: ModelPaths,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Offline training parameters
    #[serde(default)]
    pub training: TrainingConfig,
}

impl AppConfig {
    /// Load and validate configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGRO_AID` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Validates every section
    ///
    /// # Environment Variable Format
    ///
    /// - `AGRO_AID__MODELS__CROP_MODEL=...` -> `models.crop_model = ...`
    /// - `AGRO_AID__TRAINING__NEIGHBORS=7` -> `training.neighbors = 7`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if values cannot be parsed into
    /// expected types, `ConfigError::ValidationFailed` if any is out of range
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the environment without loading `.env` or validating
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGRO_AID")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.models.validate()?;
        self.logging.validate()?;
        self.training.validate()?;
        Ok(())
    }
}
