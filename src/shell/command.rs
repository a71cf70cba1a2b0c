//! Blocking external command execution.
//!
//! All preflight commands run synchronously, one at a time, in program
//! order. The version probe captures stdout; setup commands inherit the
//! operator's streams so their output appears live.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when the command inherited stdout).
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a result from an exit code and captured output.
    pub fn new(exit_code: Option<i32>, stdout: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            duration,
            success: exit_code == Some(0),
        }
    }
}

/// Run a command to completion with stdout captured.
///
/// stderr is inherited so diagnostics from the probed tool still reach the
/// operator. The io::Error path means the command could not be spawned at
/// all (typically: not on PATH).
pub fn run_captured(program: &str, args: &[&str]) -> std::io::Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()?;

    tracing::debug!(program, code = ?output.status.code(), "captured command finished");

    Ok(CommandResult::new(
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        start.elapsed(),
    ))
}

/// Run a command to completion with stdout and stderr inherited.
///
/// Used for setup commands whose progress the operator should see live.
pub fn run_passthrough(program: &str, args: &[&str]) -> std::io::Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    tracing::debug!(program, code = ?status.code(), "passthrough command finished");

    Ok(CommandResult::new(
        status.code(),
        String::new(),
        start.elapsed(),
    ))
}
