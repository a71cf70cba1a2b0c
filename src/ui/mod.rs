//! Operator-facing status output.
//!
//! This module provides:
//! - [`StatusSink`] trait, the leveled message sink injected into the
//!   preflight supervisor (no ambient global logger)
//! - [`TerminalSink`] for terminal usage
//! - [`MockSink`] for tests

pub mod mock;
pub mod terminal;

pub use mock::MockSink;
pub use terminal::TerminalSink;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress and status.
    #[default]
    Normal,
    /// Show nothing except warnings and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Leveled message sink for operator-facing output.
///
/// Passed explicitly to the supervisor so tests can capture what the
/// operator would see.
pub trait StatusSink {
    /// Display a progress message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
