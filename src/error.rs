//! Error types for cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Every preflight failure is terminal: it is detected at the failing
//! operation, reported as a single human-readable line, and converted into a
//! non-zero process exit in `main`. Nothing is retried.

use crate::version::Version;
use thiserror::Error;

/// Core error type for cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// The required interpreter is not on the system.
    #[error("{interpreter} not installed")]
    PrerequisiteMissing { interpreter: String },

    /// The interpreter is present but its version output could not be parsed.
    #[error("unknown {interpreter} version: {output}")]
    PrerequisiteUnknown { interpreter: String, output: String },

    /// The installed interpreter version is below the configured minimum.
    #[error("{interpreter} version {minimum}+ needed, found {installed}")]
    PrerequisiteOutdated {
        interpreter: String,
        installed: Version,
        minimum: Version,
    },

    /// An install/update or dependency-resolution command returned non-zero.
    #[error("{stage} failed with exit code {code:?}")]
    SetupFailed { stage: String, code: Option<i32> },

    /// The dependency manager is absent and automatic setup was not requested.
    #[error("{manager} not installed. Re-run with --refetch to install it")]
    SetupRequired { manager: String },

    /// A command could not be spawned at all.
    #[error("failed to launch {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
