//! Preflight checks and server launch orchestration.
//!
//! The run is a strictly sequential state machine:
//!
//! ```text
//! START → VERSION_CHECKED → (SETUP_SKIPPED | SETUP_DONE) → CHILD_RUNNING → TERMINATED
//! ```
//!
//! Every failure is terminal; there are no retries and no branching back.
//! External tools are reached through the [`Toolchain`] trait and operator
//! output through [`StatusSink`], both injected by the caller.

pub mod mock;
pub mod supervise;
pub mod toolchain;

pub use mock::MockToolchain;
pub use toolchain::{SystemToolchain, Toolchain, INTERPRETER, MANAGER};

use crate::error::{CairnError, Result};
use crate::ui::StatusSink;
use crate::version::Version;

/// Options controlling a preflight run.
#[derive(Debug, Clone, Copy)]
pub struct PreflightOptions {
    /// Install/update the dependency manager and refetch dependencies
    /// before launching.
    pub refetch: bool,

    /// Minimum interpreter version required (inclusive lower bound).
    pub minimum: Version,
}

/// Run the preflight sequence and, when it passes, the supervised server.
///
/// Returns `Ok(())` once the server has exited, regardless of the server's
/// own exit code. Every abort path returns one of the [`CairnError`]
/// prerequisite/setup variants.
pub fn run(
    opts: &PreflightOptions,
    tools: &dyn Toolchain,
    sink: &mut dyn StatusSink,
) -> Result<()> {
    let installed = check_interpreter(opts.minimum, tools, sink)?;
    tracing::debug!(%installed, minimum = %opts.minimum, "interpreter version accepted");

    if opts.refetch {
        sink.message("Installing or updating bundler...");
        let result = tools.install_manager()?;
        if !result.success {
            return Err(CairnError::SetupFailed {
                stage: "bundler installation".to_string(),
                code: result.exit_code,
            });
        }

        sink.message("Resolving dependencies...");
        let result = tools.resolve_dependencies()?;
        if !result.success {
            return Err(CairnError::SetupFailed {
                stage: "dependency installation".to_string(),
                code: result.exit_code,
            });
        }
    } else if !tools.manager_on_path() {
        return Err(CairnError::SetupRequired {
            manager: "bundler".to_string(),
        });
    }

    sink.message("Starting server...");
    tools.serve()
}

/// Probe the installed interpreter and gate on the minimum version.
fn check_interpreter(
    minimum: Version,
    tools: &dyn Toolchain,
    sink: &mut dyn StatusSink,
) -> Result<Version> {
    let probe = tools.interpreter_version()?;
    if !probe.success {
        return Err(CairnError::PrerequisiteMissing {
            interpreter: INTERPRETER.to_string(),
        });
    }

    let installed =
        Version::parse_probe_output(&probe.stdout).map_err(|e| CairnError::PrerequisiteUnknown {
            interpreter: INTERPRETER.to_string(),
            output: e.text,
        })?;

    sink.message(&format!("Ruby version {} found...", installed));

    if installed < minimum {
        return Err(CairnError::PrerequisiteOutdated {
            interpreter: INTERPRETER.to_string(),
            installed,
            minimum,
        });
    }

    Ok(installed)
}
