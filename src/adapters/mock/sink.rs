//! Recording message sink for testing.

use crate::ports::MessageSink;

/// Sink that keeps every emitted message in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl MessageSink for RecordingSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
