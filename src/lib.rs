//! Cairn - preflight checks and supervised launch for Jekyll development sites.
//!
//! Cairn replaces the ad-hoc "check Ruby, maybe bundle install, run
//! `jekyll serve`" shell script: it verifies the installed interpreter meets
//! a minimum version, optionally installs/updates bundler and resolves gem
//! dependencies, then launches the site server as a supervised foreground
//! child with interrupt forwarding.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`preflight`] - The check → setup → launch state machine
//! - [`shell`] - External command execution and PATH lookup
//! - [`ui`] - Operator-facing status output
//! - [`version`] - Version parsing and comparison
//!
//! # Example
//!
//! ```no_run
//! use cairn::preflight::{self, MockToolchain, PreflightOptions};
//! use cairn::ui::MockSink;
//! use cairn::version::Version;
//!
//! let opts = PreflightOptions { refetch: false, minimum: Version::new(2, 1, 0) };
//! let tools = MockToolchain::new();
//! let mut sink = MockSink::new();
//! preflight::run(&opts, &tools, &mut sink).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod preflight;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{CairnError, Result};
pub use version::Version;
