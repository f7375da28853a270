//! Console rendering of use-case status messages

use std::cell::Cell;
use std::io::Write;

use statstack::domain::ports::{Severity, StatusSink};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Writes status lines to stderr, one per message
pub struct ConsoleSink {
    color: bool,
    unicode: bool,
    warnings: Cell<usize>,
}

impl ConsoleSink {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            color,
            unicode,
            warnings: Cell::new(0),
        }
    }

    /// Warnings emitted so far
    pub fn warnings(&self) -> usize {
        self.warnings.get()
    }

    fn format(&self, severity: Severity, message: &str) -> String {
        match severity {
            Severity::Info => format!(
                "{} {}",
                Icon::Progress.colored(self.color, self.unicode),
                message
            ),
            Severity::Warn => format!(
                "{} {}",
                Icon::Warning.colored(self.color, self.unicode),
                ColoredText::warning(message).render(self.color)
            ),
            Severity::Fatal => format!(
                "{} {}",
                Icon::Error.colored(self.color, self.unicode),
                ColoredText::error(message).bold().render(self.color)
            ),
        }
    }
}

impl StatusSink for ConsoleSink {
    fn emit(&self, severity: Severity, message: &str) {
        if severity == Severity::Warn {
            self.warnings.set(self.warnings.get() + 1);
        }
        let line = self.format(severity, message);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}
