//! Dialogue - the step-driven questionnaire state machine.

mod engine;
pub mod messages;
mod mode;
mod questionnaire;
mod session;

pub use engine::AgroAidBot;
pub use mode::DialogueMode;
pub use questionnaire::{
    field, Questionnaire, QuestionnaireKind, CROP_FIELDS, CROP_QUESTIONNAIRE, FERTILIZER_FIELDS,
    FERTILIZER_QUESTIONNAIRE,
};
pub use session::{Answers, Progress, SessionState};
