//! Console Adapter
//!
//! A line-oriented terminal shell around the bot: reads user lines, handles
//! `quit`, and prints bot messages.

mod shell;

pub use shell::{is_quit, run_shell, ConsoleSink, ShellExit};
