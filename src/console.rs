//! Severity-tagged console output.

use crate::utils::Logger;
use colored::{Color, Colorize};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Log,
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    fn color(&self) -> Color {
        match self {
            Severity::Log => Color::BrightBlack,
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        }
    }
}

/// Sink for one-line status messages.
pub trait Console {
    fn write(&self, severity: Severity, message: &str);

    fn log(&self, message: &str) {
        self.write(Severity::Log, message);
    }

    fn info(&self, message: &str) {
        self.write(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.write(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.write(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.write(Severity::Warning, message);
    }
}

/// Colored terminal output, optionally mirrored into an audit log.
pub struct Terminal {
    audit: Option<Logger>,
}

impl Terminal {
    pub fn new(audit: Option<Logger>) -> Self {
        Self { audit }
    }
}

impl Console for Terminal {
    fn write(&self, severity: Severity, message: &str) {
        let line = message.color(severity.color());
        if severity == Severity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }

        if let Some(logger) = &self.audit {
            let _ = logger.log(severity.as_str(), message);
        }
    }
}

/// Keeps every line in memory instead of printing it.
#[derive(Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<(Severity, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.borrow().clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Console for RecordingConsole {
    fn write(&self, severity: Severity, message: &str) {
        self.lines.borrow_mut().push((severity, message.to_string()));
    }
}
