//! Application layer - offline jobs around the models.
//!
//! - `training` - fit models and encoders from CSV datasets
//! - `smoke_test` - verify a persisted fertilizer model end to end

pub mod training;
