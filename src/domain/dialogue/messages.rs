//! User-facing message text.

use super::QuestionnaireKind;
use crate::domain::prediction::PredictionError;

pub const GREETING: &str = "Hello! I am Agro Aid. How can I help you today?\n";

pub const MAIN_MENU: &str =
    "Please choose an option:\n1) Crop prediction\n2) Fertilizer recommendation\nType 'quit' to exit";

pub const BACK_TO_MENU: &str = "\nBack to main menu. Please choose an option:";

pub const INVALID_OPTION: &str = "❌ Invalid option. Please choose between 1-2.";

pub const GOODBYE: &str = "Goodbye! 👋";

pub fn selected(kind: QuestionnaireKind) -> String {
    format!("You've selected {}.", kind.questionnaire().title())
}

pub fn field_prompt(field: &str) -> String {
    format!("Please enter {}:", field)
}

pub fn prediction_failed(kind: QuestionnaireKind, error: &PredictionError) -> String {
    let action = match kind {
        QuestionnaireKind::Crop => "crop prediction",
        QuestionnaireKind::Fertilizer => "fertilizer recommendation",
    };
    format!("❌ Error during {}: {}", action, error)
}
