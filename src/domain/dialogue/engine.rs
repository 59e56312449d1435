//! Dialogue engine.
//!
//! `AgroAidBot::process_input` is the single entry point the shell calls per
//! user message. All output goes through the injected `MessageSink`.

use tracing::{debug, warn};

use super::{messages, Progress, QuestionnaireKind, SessionState};
use crate::domain::prediction::ModelSuite;
use crate::ports::MessageSink;

/// The conversational front-end over both recommenders.
pub struct AgroAidBot<S> {
    models: ModelSuite,
    session: SessionState,
    sink: S,
}

impl<S: MessageSink> AgroAidBot<S> {
    pub fn new(models: ModelSuite, sink: S) -> Self {
        Self {
            models,
            session: SessionState::new(),
            sink,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the bot, handing back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Emits the opening greeting and the main menu.
    pub fn greet(&mut self) {
        self.sink.emit(messages::GREETING);
        self.sink.emit(messages::MAIN_MENU);
    }

    /// Handles one raw line of user input.
    pub fn process_input(&mut self, input: &str) {
        match self.session.mode().questionnaire_kind() {
            None => self.handle_menu_choice(input),
            Some(_) => self.handle_answer(input),
        }
    }

    fn handle_menu_choice(&mut self, input: &str) {
        let Some(kind) = QuestionnaireKind::from_menu_choice(input) else {
            debug!(input, "invalid menu selection");
            self.sink.emit(messages::INVALID_OPTION);
            return;
        };

        match self.session.begin(kind) {
            Ok(first) => {
                debug!(?kind, "questionnaire started");
                self.sink.emit(&messages::selected(kind));
                self.sink.emit(&messages::field_prompt(first));
            }
            Err(e) => warn!(error = %e, "could not start questionnaire"),
        }
    }

    fn handle_answer(&mut self, input: &str) {
        match self.session.record(input) {
            Ok(Progress::NextField(field)) => {
                self.sink.emit(&messages::field_prompt(field));
            }
            Ok(Progress::Complete(kind)) => {
                for message in self.predict(kind) {
                    self.sink.emit(&message);
                }
                self.session.reset();
                self.sink.emit(messages::BACK_TO_MENU);
            }
            Err(e) => {
                warn!(error = %e, "answer rejected, returning to menu");
                self.session.reset();
                self.sink.emit(messages::BACK_TO_MENU);
            }
        }
    }

    /// Result lines on success, or a single failure line.
    fn predict(&self, kind: QuestionnaireKind) -> Vec<String> {
        match self.models.run(kind, self.session.answers()) {
            Ok(lines) => {
                debug!(?kind, "prediction succeeded");
                lines
            }
            Err(e) => {
                warn!(?kind, error = %e, "prediction failed");
                vec![messages::prediction_failed(kind, &e)]
            }
        }
    }
}
