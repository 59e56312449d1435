//! Adapters - Implementations of the ports.
//!
//! - `models` - JSON-persisted classifiers and label encoders
//! - `console` - terminal shell and console message sink
//! - `mock` - in-memory fakes for tests

pub mod console;
pub mod mock;
pub mod models;
