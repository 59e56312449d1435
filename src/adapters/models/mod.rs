//! Model Adapters
//!
//! Concrete implementations of the `Classifier` and `LabelEncoders` ports,
//! persisted as JSON artifacts.
//!
//! ## Available Adapters
//!
//! - **NearestNeighbors** - standardised k-NN, multi-output capable
//! - **FittedLabelEncoder** / **EncoderSet** - sorted-class label encoders
//!
//! ## Usage
//!
//! ```ignore
//! let suite = load_model_suite(&config.models)?;
//! let bot = AgroAidBot::new(suite, sink);
//! ```

mod artifact;
mod label_encoder;
mod nearest_neighbors;
mod suite;

pub use artifact::{read_json, write_json, ArtifactError};
pub use label_encoder::{EncoderSet, FittedLabelEncoder};
pub use nearest_neighbors::{FeatureStats, NearestNeighbors};
pub use suite::{load_crop_recommender, load_fertilizer_recommender, load_model_suite};
