//! Ports - Interfaces for external collaborators.
//!
//! The dialogue and prediction code only talk to models, encoders and the
//! host shell through these traits. Adapters implement them.
//!
//! - `Classifier` - a fitted model mapping feature rows to label codes
//! - `LabelEncoder` / `LabelEncoders` - category string to code mappings
//! - `MessageSink` - the channel that carries bot output to the shell

mod classifier;
mod label_encoder;
mod message_sink;

pub use classifier::{Classifier, ModelError};
pub use label_encoder::{EncodingError, LabelEncoder, LabelEncoders};
pub use message_sink::MessageSink;
