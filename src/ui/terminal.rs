//! Terminal-backed status sink.

use super::{OutputMode, StatusSink};
use console::style;

/// Status sink that writes styled lines to the terminal.
///
/// Progress and success lines go to stdout and respect the output mode;
/// warnings and errors go to stderr unconditionally.
#[derive(Debug)]
pub struct TerminalSink {
    mode: OutputMode,
}

impl TerminalSink {
    /// Create a terminal sink with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl StatusSink for TerminalSink {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", style(msg).green());
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", style(msg).yellow());
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_reports_its_mode() {
        let sink = TerminalSink::new(OutputMode::Quiet);
        assert_eq!(sink.mode(), OutputMode::Quiet);
    }

    #[test]
    fn sink_methods_do_not_panic() {
        let mut sink = TerminalSink::new(OutputMode::Normal);
        sink.message("msg");
        sink.success("ok");
        sink.warning("warn");
        sink.error("err");
    }
}
