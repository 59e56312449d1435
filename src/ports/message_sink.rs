//! Message Sink Port - the single outbound channel of the bot.
//!
//! Messages are delivered synchronously and in emission order.

/// Port through which the dialogue reports text to its host.
pub trait MessageSink {
    /// Delivers one message.
    fn emit(&mut self, message: &str);
}

impl<F> MessageSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, message: &str) {
        self(message)
    }
}
