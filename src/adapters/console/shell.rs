//! Terminal shell.

use std::io::{self, BufRead, Write};
use tracing::{debug, error, warn};

use crate::domain::dialogue::{messages, AgroAidBot};
use crate::ports::MessageSink;

const BOT_PREFIX: &str = "🤖 Bot: ";

/// Prints each message on its own line with the bot prefix.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn emit(&mut self, message: &str) {
        let written =
            writeln!(self.out, "{}{}", BOT_PREFIX, message).and_then(|_| self.out.flush());
        if let Err(e) = written {
            error!(error = %e, "failed to write bot message");
        }
    }
}

/// Why the shell stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The user typed `quit`.
    Quit,
    /// Input reached end of file.
    EndOfInput,
}

/// True for the shell's exit command, in any letter case.
pub fn is_quit(message: &str) -> bool {
    message.eq_ignore_ascii_case("quit")
}

/// Greets, then relays trimmed, non-blank lines to the bot until `quit` or
/// end of input. Lines that are not valid UTF-8 are skipped.
pub fn run_shell<R, S>(bot: &mut AgroAidBot<S>, input: R) -> io::Result<ShellExit>
where
    R: BufRead,
    S: MessageSink,
{
    bot.greet();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "skipping input line that is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e),
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if is_quit(message) {
            bot.sink_mut().emit(messages::GOODBYE);
            return Ok(ShellExit::Quit);
        }
        debug!(message, "user input");
        bot.process_input(message);
    }

    Ok(ShellExit::EndOfInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedClassifier, RecordingSink};
    use crate::adapters::models::{EncoderSet, FittedLabelEncoder};
    use crate::domain::prediction::{CropRecommender, FertilizerRecommender, ModelSuite};
    use std::io::Cursor;

    fn suite() -> ModelSuite {
        let mut crop = EncoderSet::new();
        crop.insert(FittedLabelEncoder::fit("Soil_Type", ["Loamy"]));
        crop.insert(FittedLabelEncoder::fit("Variety", ["Durum"]));
        let mut fertilizer = EncoderSet::new();
        fertilizer.insert(FittedLabelEncoder::fit("Soil_Type", ["Loamy"]));
        fertilizer.insert(FittedLabelEncoder::fit("Crop", ["Wheat"]));
        fertilizer.insert(FittedLabelEncoder::fit("FertilizerName", ["Urea"]));

        ModelSuite::new(
            CropRecommender::new(
                Box::new(FixedClassifier::new(7, vec!["Soil_Type", "Variety"], vec![0, 0])),
                Box::new(crop),
            ),
            FertilizerRecommender::new(
                Box::new(FixedClassifier::new(8, vec!["FertilizerName"], vec![0])),
                Box::new(fertilizer),
            ),
        )
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert!(is_quit("quit"));
        assert!(is_quit("QUIT"));
        assert!(is_quit("Quit"));
        assert!(!is_quit("quitting"));
    }

    #[test]
    fn quit_says_goodbye_and_stops_reading() {
        let mut bot = AgroAidBot::new(suite(), RecordingSink::new());

        let exit = run_shell(&mut bot, Cursor::new("QUIT\n1\n")).unwrap();

        assert_eq!(exit, ShellExit::Quit);
        assert_eq!(bot.sink().messages().last().unwrap(), messages::GOODBYE);
        assert!(bot.session().mode().is_idle());
    }

    #[test]
    fn blank_lines_are_ignored_and_input_is_trimmed() {
        let mut bot = AgroAidBot::new(suite(), RecordingSink::new());

        let exit = run_shell(&mut bot, Cursor::new("\n   \n  1  \n")).unwrap();

        assert_eq!(exit, ShellExit::EndOfInput);
        assert_eq!(
            bot.sink().messages(),
            &[
                messages::GREETING,
                messages::MAIN_MENU,
                "You've selected Crop Prediction.",
                "Please enter Nitrogen:",
            ]
        );
    }

    #[test]
    fn undecodable_line_is_skipped_and_session_continues() {
        let mut bot = AgroAidBot::new(suite(), RecordingSink::new());
        let input: &[u8] = b"\xff\xfe\n1\n\xc3\n10\n";

        let exit = run_shell(&mut bot, input).unwrap();

        assert_eq!(exit, ShellExit::EndOfInput);
        assert_eq!(bot.session().cursor(), 1);
        assert_eq!(bot.session().answers().get("Nitrogen"), Some("10"));
    }

    #[test]
    fn console_sink_prefixes_each_message() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit("first");
        sink.emit("second");

        let printed = String::from_utf8(sink.into_inner()).unwrap();

        assert_eq!(printed, "🤖 Bot: first\n🤖 Bot: second\n");
    }

    #[test]
    fn full_fertilizer_conversation_over_console() {
        let mut bot = AgroAidBot::new(suite(), ConsoleSink::new(Vec::new()));
        let script = "2\n26\n75\n40\nLoamy\nWheat\n50\n30\n40\nquit\n";

        run_shell(&mut bot, Cursor::new(script)).unwrap();

        let printed = String::from_utf8(bot.into_sink().into_inner()).unwrap();
        assert!(printed.contains("🤖 Bot: 💡 Recommended Fertilizer: Urea\n"));
        assert!(printed.ends_with("🤖 Bot: Goodbye! 👋\n"));
    }
}
