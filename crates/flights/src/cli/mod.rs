//! Command-line interface for flights.
//!
//! This module provides the CLI structure for the `flights` binary.

mod commands;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, DataFileArgs, DisplayCommand, SelectCommand};

/// Two-letter short flags and the long flags they stand for.
///
/// clap only knows single-character short flags, so these are rewritten
/// before parsing.
const SHORT_ALIASES: [(&str, &str); 2] = [
    ("-dd", "--departure_date"),
    ("-at", "--aircraft_type"),
];

/// flights - Record, list and filter flights
///
/// Flights are kept as a JSON array in a data file given with `--data` or
/// the `aregpython` environment variable.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new flight
    Add(AddCommand),

    /// Display all flights
    Display(DisplayCommand),

    /// Select flights by departure date
    Select(SelectCommand),
}

impl Command {
    /// The data file passed to this command with `--data`, if any.
    #[must_use]
    pub fn data_file(&self) -> Option<&Path> {
        match self {
            Self::Add(cmd) => cmd.file.path(),
            Self::Display(cmd) => cmd.file.path(),
            Self::Select(cmd) => cmd.file.path(),
        }
    }
}

impl Cli {
    /// Parse the process arguments, accepting `-dd` and `-at`.
    #[must_use]
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The data file given on the command line, if any.
    #[must_use]
    pub fn data_file(&self) -> Option<&Path> {
        self.command.as_ref().and_then(Command::data_file)
    }
}

/// Options whose next token is their value.
const VALUE_OPTIONS: [&str; 10] = [
    "-c",
    "--config",
    "-f",
    "--data",
    "-d",
    "--destination",
    "--departure_date",
    "--aircraft_type",
    "-D",
    "--date",
];

/// Rewrite `-dd` and `-at` (bare or `=value`) into their long forms.
///
/// Only tokens in flag position are rewritten: the value following an option
/// and everything after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut done = false;
    let mut value_next = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if done || std::mem::take(&mut value_next) {
                return arg;
            }
            if arg == "--" {
                done = true;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (short, long) in SHORT_ALIASES {
                if text == short {
                    value_next = true;
                    return OsString::from(long);
                }
                if let Some(value) = text
                    .strip_prefix(short)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            value_next = VALUE_OPTIONS.contains(&text);
            arg
        })
        .collect()
}
