//! voxalign CLI - Text-to-speech with word timestamps

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use voxalign::cli::{Cli, report_error, report_usage, run_cli};

fn main() -> ExitCode {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = color_eyre::install() {
        tracing::warn!(error = %e, "failed to install error report handler");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // No parsed flags to go by, so check the raw arguments.
            let json_only = std::env::args_os().any(|arg| arg == "--json-only");
            return report_usage(e, json_only);
        }
    };

    let json_only = cli.json_only;

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, json_only);
            ExitCode::FAILURE
        }
    }
}
