//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::{Path, PathBuf};

use clap::Args;

/// Data file selection shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct DataFileArgs {
    /// The data file name (falls back to the `aregpython` environment variable)
    #[arg(short = 'f', long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,
}

impl DataFileArgs {
    /// The path given on the command line, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.data.as_deref()
    }
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub file: DataFileArgs,

    /// Destination of the flight
    #[arg(short = 'd', long)]
    pub destination: String,

    /// Departure date of the flight (also `-dd`)
    #[arg(long = "departure_date", value_name = "DATE")]
    pub departure_date: String,

    /// Aircraft type of the flight (also `-at`)
    #[arg(long = "aircraft_type", value_name = "TYPE")]
    pub aircraft_type: String,
}

/// Display command arguments.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub file: DataFileArgs,
}

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub file: DataFileArgs,

    /// Departure date to select flights (YYYY-MM-DD); matched against the aircraft type
    #[arg(short = 'D', long)]
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_args_default() {
        assert!(DataFileArgs::default().path().is_none());
    }

    #[test]
    fn test_data_file_args_path() {
        let args = DataFileArgs {
            data: Some(PathBuf::from("flights.json")),
        };
        assert_eq!(args.path(), Some(Path::new("flights.json")));
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            file: DataFileArgs::default(),
            destination: "Paris".to_string(),
            departure_date: "2024-05-01".to_string(),
            aircraft_type: "A320".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("destination"));
        assert!(debug_str.contains("Paris"));
    }

    #[test]
    fn test_select_command_debug() {
        let cmd = SelectCommand {
            file: DataFileArgs::default(),
            date: "A320".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("date"));
    }
}
