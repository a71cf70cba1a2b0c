//! External tool invocations behind a trait seam.

use crate::error::{CairnError, Result};
use crate::preflight::supervise;
use crate::shell::{self, CommandResult};
use std::process::Command;

/// The interpreter the site generator runs on.
pub const INTERPRETER: &str = "ruby";

/// The dependency manager executable the launch path needs.
///
/// The gem is named `bundler` but the executable the run path invokes is
/// `bundle`, so that is what the presence probe checks.
pub const MANAGER: &str = "bundle";

/// External processes consumed by the preflight run.
///
/// Each method is a blocking call; only exit codes (and stdout for the
/// version probe) are observable. This seam exists so the supervisor's
/// control flow can be tested without a Ruby toolchain on the machine.
pub trait Toolchain {
    /// Capture `ruby --version` output.
    ///
    /// Errs with [`CairnError::PrerequisiteMissing`] when the interpreter
    /// cannot be invoked at all.
    fn interpreter_version(&self) -> Result<CommandResult>;

    /// Check whether the dependency manager is on the search path.
    fn manager_on_path(&self) -> bool;

    /// Run `gem install bundler` with output passed through.
    fn install_manager(&self) -> Result<CommandResult>;

    /// Run `bundle install` with output passed through.
    fn resolve_dependencies(&self) -> Result<CommandResult>;

    /// Spawn the site server and supervise it until it exits.
    fn serve(&self) -> Result<()>;
}

/// Toolchain backed by the real system commands.
#[derive(Debug, Default)]
pub struct SystemToolchain;

impl SystemToolchain {
    pub fn new() -> Self {
        Self
    }
}

impl Toolchain for SystemToolchain {
    fn interpreter_version(&self) -> Result<CommandResult> {
        shell::run_captured(INTERPRETER, &["--version"]).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CairnError::PrerequisiteMissing {
                    interpreter: INTERPRETER.to_string(),
                }
            } else {
                CairnError::Io(e)
            }
        })
    }

    fn manager_on_path(&self) -> bool {
        shell::tool_on_path(MANAGER)
    }

    fn install_manager(&self) -> Result<CommandResult> {
        shell::run_passthrough("gem", &["install", "bundler"]).map_err(CairnError::Io)
    }

    fn resolve_dependencies(&self) -> Result<CommandResult> {
        shell::run_passthrough(MANAGER, &["install"]).map_err(CairnError::Io)
    }

    fn serve(&self) -> Result<()> {
        // --force_polling: periodic scanning instead of OS change
        // notifications, which is what a dev server behind shared folders
        // or network mounts needs.
        let mut command = Command::new(MANAGER);
        command.args(["exec", "jekyll", "serve", "--force_polling"]);
        supervise::supervise(command)
    }
}
