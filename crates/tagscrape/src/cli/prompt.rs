//! Interactive selector prompt on the terminal.

use crate::cli::output::{self, Styled};
use crate::extraction::{PromptError, RetryReason, SelectorPrompt};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, Editor};

const PROMPT: &str = "Enter the css selector to extract the tag information: ";

/// Reads selectors with line editing and in-session history.
///
/// Ctrl+C and Ctrl+D both cancel. When stdin is not a terminal, lines are read
/// from it as-is, so selectors can be piped in.
pub struct ConsolePrompt {
    editor: DefaultEditor,
}

impl ConsolePrompt {
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let editor: DefaultEditor = Editor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl SelectorPrompt for ConsolePrompt {
    fn next_selector(&mut self) -> Result<String, PromptError> {
        match self.editor.readline(PROMPT) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(PromptError::Cancelled),
            Err(err) => Err(PromptError::Input(Box::new(err))),
        }
    }

    fn report_retry(&mut self, selector: &str, reason: &RetryReason) {
        let s = Styled::new();
        let subject = if selector.is_empty() {
            String::new()
        } else {
            format!(" ({})", s.bold(selector))
        };
        output::print_warn(&format!(
            "{reason}{subject}. Please, review the selector and try again or type {} to exit.",
            s.yellow("ctrl+c")
        ));
    }
}
