//! Terminal entry point for the AAC picture board.
//!
//! # Responsibility
//! - Resolve configuration from file, environment and flags.
//! - Start logging when a log directory is configured.
//! - Run one board session over stdin/stdout.

use aacboard_cli::{run_session, Args, CliError};
use aacboard_core::init_logging;
use clap::Parser;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aacboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = args.resolve_config()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok version={} speech_backend={:?}",
        aacboard_core::core_version(),
        config.speech.backend
    );

    let mut session = args.open_session(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}
