//! Prompter port - the operator's answers
//!
//! Setup and teardown ask their questions through this trait. The binary
//! picks a terminal prompter or a line reader depending on stdin.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before an answer was given
    #[error("input closed before an answer was given")]
    Eof,

    #[error("prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Prompter {
    /// Ask for a line of text. An empty answer yields `default` when given.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask a yes/no question. An empty answer yields `default`.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        (**self).input(prompt, default)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        (**self).confirm(prompt, default)
    }
}
