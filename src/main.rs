//! Propsy CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use propsy::cli::{Cli, Command, ResolveCommand};
use propsy::sink::create_sink;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag (or `RUNNER_DEBUG=1`) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries pipeline commands.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("propsy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("propsy=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Propsy starting with args: {:?}", cli);

    let mut sink = create_sink(cli.plain, cli.output_file());
    let cwd = std::env::current_dir().unwrap_or_default();
    let cmd = ResolveCommand::from_cli(&cli, &cwd);

    match cmd.execute(sink.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            sink.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
