//! Cairn CLI entry point.

use std::process::ExitCode;

use cairn::cli::Cli;
use cairn::preflight::{self, PreflightOptions, SystemToolchain};
use cairn::ui::{OutputMode, StatusSink, TerminalSink};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cairn=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cairn=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cairn starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut sink = TerminalSink::new(mode);

    let opts = PreflightOptions {
        refetch: cli.refetch,
        minimum: cli.min_ruby,
    };

    match preflight::run(&opts, &SystemToolchain::new(), &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            sink.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
