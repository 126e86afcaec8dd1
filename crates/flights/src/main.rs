//! `flights` - CLI for recording, listing and filtering flights
//!
//! This binary parses the command line, resolves configuration once and hands
//! both to the dispatcher.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use flights::cli::Cli;
use flights::{dispatch, init_logging, Config};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse_normalized();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration; with --data it is only a fallback
    let config = Config::load_with_flag(cli.config.clone(), cli.data_file())?;

    // Execute the command
    let mut stdout = std::io::stdout().lock();
    match dispatch::run(&cli, &config, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_data_file_absent() => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
