//! Line-based prompter for piped input
//!
//! Used when stdin is not a terminal. Prompts go to the writer (stderr in the
//! binary) and each answer is one line from the reader.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::domain::ports::{PromptError, Prompter};

pub struct LinePrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn ask(&self, text: &str) -> Result<String, PromptError> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{}", text)?;
            writer.flush()?;
        }

        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        let text = match default {
            Some(d) => format!("{} [{}]: ", prompt, d),
            None => format!("{}: ", prompt),
        };
        let answer = self.ask(&text)?;
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(&format!("{} [{}]: ", prompt, hint))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
