//! Domain layer - dialogue state machine and prediction procedures.

pub mod dialogue;
pub mod foundation;
pub mod prediction;
