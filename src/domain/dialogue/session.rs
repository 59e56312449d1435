//! Session state.
//!
//! The single mutable record of the conversation: current mode, step cursor
//! and the answers collected so far. `answers` always holds exactly the
//! fields of the active questionnaire before `cursor`.

use std::collections::HashMap;

use super::{DialogueMode, Questionnaire, QuestionnaireKind};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Raw answers keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<&'static str, String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy with `field` set to `value`.
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.insert(field, value.into());
        self
    }

    fn insert(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<V: Into<String>> FromIterator<(&'static str, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

/// Outcome of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More fields remain; this is the one to ask for next.
    NextField(&'static str),
    /// Every field is collected; the questionnaire is ready for prediction.
    Complete(QuestionnaireKind),
}

/// The conversation's mutable state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    mode: DialogueMode,
    cursor: usize,
    answers: Answers,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DialogueMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The questionnaire being collected, if any.
    pub fn active_questionnaire(&self) -> Option<&'static Questionnaire> {
        self.mode.questionnaire_kind().map(|kind| kind.questionnaire())
    }

    /// Starts a questionnaire and returns its first field.
    ///
    /// # Errors
    /// Returns `ValidationError` unless the session is idle.
    pub fn begin(&mut self, kind: QuestionnaireKind) -> Result<&'static str, ValidationError> {
        self.mode = self.mode.transition_to(DialogueMode::collecting(kind))?;
        self.cursor = 0;
        self.answers.clear();
        Ok(kind.questionnaire().first_field())
    }

    /// Records `value` under the field at the cursor and advances.
    ///
    /// # Errors
    /// Returns `ValidationError` when idle or when the questionnaire is
    /// already complete.
    pub fn record(&mut self, value: impl Into<String>) -> Result<Progress, ValidationError> {
        let questionnaire = self.active_questionnaire().ok_or_else(|| {
            ValidationError::invalid_format("mode", "no questionnaire is being collected")
        })?;
        let field = questionnaire.field(self.cursor).ok_or_else(|| {
            ValidationError::out_of_range("cursor", 0, questionnaire.len(), self.cursor)
        })?;

        self.answers.insert(field, value.into());
        self.cursor += 1;

        Ok(match questionnaire.field(self.cursor) {
            Some(next) => Progress::NextField(next),
            None => Progress::Complete(questionnaire.kind()),
        })
    }

    /// Returns to idle and forgets the collected answers.
    pub fn reset(&mut self) {
        self.mode = DialogueMode::Idle;
        self.cursor = 0;
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(session: &mut SessionState, values: &[&str]) -> Progress {
        let mut last = None;
        for value in values {
            last = Some(session.record(*value).unwrap());
        }
        last.expect("at least one value")
    }

    mod begin {
        use super::*;

        #[test]
        fn starts_crop_at_first_field() {
            let mut session = SessionState::new();
            assert_eq!(session.begin(QuestionnaireKind::Crop), Ok("Nitrogen"));
            assert_eq!(session.mode(), DialogueMode::CollectingCrop);
            assert_eq!(session.cursor(), 0);
            assert!(session.answers().is_empty());
        }

        #[test]
        fn clears_answers_left_by_an_earlier_questionnaire() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Fertilizer).unwrap();
            fill(&mut session, &["26", "75"]);
            session.reset();

            session.begin(QuestionnaireKind::Crop).unwrap();
            assert!(session.answers().is_empty());
            assert_eq!(session.cursor(), 0);
        }

        #[test]
        fn is_rejected_while_collecting() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Crop).unwrap();
            assert!(session.begin(QuestionnaireKind::Fertilizer).is_err());
            assert_eq!(session.mode(), DialogueMode::CollectingCrop);
        }
    }

    mod record {
        use super::*;

        #[test]
        fn is_rejected_when_idle() {
            let mut session = SessionState::new();
            assert!(session.record("10").is_err());
            assert!(session.answers().is_empty());
        }

        #[test]
        fn stores_values_under_fields_before_cursor() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Crop).unwrap();
            let progress = fill(&mut session, &["10", "20", "15"]);

            assert_eq!(progress, Progress::NextField("Temperature"));
            assert_eq!(session.cursor(), 3);
            assert_eq!(session.answers().len(), 3);
            assert_eq!(session.answers().get("Nitrogen"), Some("10"));
            assert_eq!(session.answers().get("Potassium"), Some("15"));
            assert!(!session.answers().contains("Temperature"));
        }

        #[test]
        fn accepts_non_numeric_values_without_validation() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Crop).unwrap();
            assert_eq!(session.record("lots"), Ok(Progress::NextField("Phosphorus")));
            assert_eq!(session.answers().get("Nitrogen"), Some("lots"));
        }

        #[test]
        fn reports_completion_after_last_field() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Fertilizer).unwrap();
            let progress = fill(
                &mut session,
                &["26", "75", "40", "Loamy", "Wheat", "50", "30", "40"],
            );

            assert_eq!(progress, Progress::Complete(QuestionnaireKind::Fertilizer));
            assert_eq!(session.cursor(), 8);
            assert_eq!(session.answers().len(), 8);
        }

        #[test]
        fn is_rejected_once_complete() {
            let mut session = SessionState::new();
            session.begin(QuestionnaireKind::Crop).unwrap();
            fill(&mut session, &["1", "2", "3", "4", "5", "6", "7"]);
            assert!(session.record("8").is_err());
            assert_eq!(session.answers().len(), 7);
        }
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut session = SessionState::new();
        session.begin(QuestionnaireKind::Crop).unwrap();
        fill(&mut session, &["10"]);
        session.reset();

        assert_eq!(session.mode(), DialogueMode::Idle);
        assert_eq!(session.cursor(), 0);
        assert!(session.answers().is_empty());
        assert!(session.active_questionnaire().is_none());
    }

    #[test]
    fn answers_collect_from_pairs() {
        let answers: Answers = [("Soil_Type", "Loamy"), ("Crop", "Wheat")].into_iter().collect();
        assert_eq!(answers.get("Crop"), Some("Wheat"));
        assert_eq!(answers.len(), 2);
    }
}
