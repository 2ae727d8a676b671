//! Async line input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` behind the [`LineSource`] trait so the
//! loop logic can be driven by a scripted source in tests. EOF (Ctrl+D) and
//! interrupt (Ctrl+C) surface as distinct events; both end the session
//! gracefully instead of crashing out of the terminal.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by a line source.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// User submitted a line (already trimmed).
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Anything the session loop can read lines from.
pub trait LineSource {
    /// Update the prompt shown before the next read.
    fn set_prompt(&mut self, prompt: &str);

    /// Read the next input event.
    fn next_event(&mut self) -> impl std::future::Future<Output = InputEvent> + Send;
}

/// Terminal-backed line source.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create a terminal input with an initial prompt.
    ///
    /// Also returns a `SharedWriter` for printing without clobbering the
    /// readline prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }
}

impl LineSource for ChatInput {
    fn set_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    async fn next_event(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                InputEvent::Line(line.trim().to_string())
            }
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }
}
