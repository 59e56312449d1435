//! Dialogue mode state machine.

use serde::{Deserialize, Serialize};

use super::QuestionnaireKind;
use crate::domain::foundation::StateMachine;

/// What the bot is currently doing.
///
/// - `Idle`: showing the main menu, waiting for a selection
/// - `CollectingCrop`: asking the crop questionnaire
/// - `CollectingFertilizer`: asking the fertilizer questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueMode {
    #[default]
    Idle,
    CollectingCrop,
    CollectingFertilizer,
}

impl DialogueMode {
    /// The collecting mode for a questionnaire.
    pub fn collecting(kind: QuestionnaireKind) -> Self {
        match kind {
            QuestionnaireKind::Crop => Self::CollectingCrop,
            QuestionnaireKind::Fertilizer => Self::CollectingFertilizer,
        }
    }

    /// The questionnaire being collected, or `None` when idle.
    pub fn questionnaire_kind(&self) -> Option<QuestionnaireKind> {
        match self {
            Self::Idle => None,
            Self::CollectingCrop => Some(QuestionnaireKind::Crop),
            Self::CollectingFertilizer => Some(QuestionnaireKind::Fertilizer),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl StateMachine for DialogueMode {
    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueMode::*;
        match self {
            Idle => vec![CollectingCrop, CollectingFertilizer],
            CollectingCrop | CollectingFertilizer => vec![Idle],
        }
    }
}
