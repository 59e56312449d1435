//! State machine trait for mode enums.
//!
//! Gives every mode enum the same guarded `transition_to` so that a session
//! can only move along edges its mode declares.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their outgoing edges; validated transitions come for free.
///
/// # Example
///
/// ```ignore
/// let next = DialogueMode::Idle.transition_to(DialogueMode::CollectingCrop)?;
/// assert_eq!(next, DialogueMode::CollectingCrop);
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if a transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, returning an error if the edge does not exist.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
