//! Mock status sink for tests.

use super::StatusSink;

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Message,
    Success,
    Warning,
    Error,
}

/// Status sink that records every line it receives.
#[derive(Debug, Default)]
pub struct MockSink {
    lines: Vec<(Level, String)>,
}

impl MockSink {
    /// Create an empty mock sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in order.
    pub fn lines(&self) -> &[(Level, String)] {
        &self.lines
    }

    /// Whether any recorded line contains the given fragment.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.iter().any(|(_, msg)| msg.contains(fragment))
    }

    /// Recorded lines at a specific level.
    pub fn at_level(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }
}

impl StatusSink for MockSink {
    fn message(&mut self, msg: &str) {
        self.lines.push((Level::Message, msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push((Level::Success, msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push((Level::Warning, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push((Level::Error, msg.to_string()));
    }
}
