//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros on the [`Cli`]
//! struct. There are no subcommands; the only action is the preflight run.

use crate::version::Version;
use clap::Parser;

/// Cairn - preflight checks and supervised launch for a Jekyll dev site.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install or update bundler and refetch dependencies before serving
    #[arg(short, long)]
    pub refetch: bool,

    /// Minimum Ruby version required to run the site
    #[arg(long, value_name = "VERSION", env = "CAIRN_MIN_RUBY", default_value = "2.1.0")]
    pub min_ruby: Version,

    /// Minimal output (warnings and errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
