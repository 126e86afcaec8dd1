//! Command dispatch.
//!
//! Resolves the data file, loads the flight list, runs one command and saves
//! the list again if the command changed it.

use std::io::Write;

use tracing::{debug, info};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::display::render_flights;
use crate::error::Result;
use crate::record::{add_flight, select_flights};
use crate::storage::Storage;

/// Run the parsed command line against `config`, writing tables to `out`.
///
/// The data file is only saved when the command added a flight. Without a
/// command the data file is still resolved and loaded, then nothing happens.
///
/// # Errors
///
/// Returns [`crate::Error::DataFileAbsent`] before any file I/O if no data
/// file can be resolved, and propagates load, save and output failures.
pub fn run(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let path = config.resolve_data_file(cli.data_file())?;
    let storage = Storage::new(path);
    debug!("Using data file {}", storage.path().display());

    let mut flights = storage.load_or_default()?;
    let mut dirty = false;

    match &cli.command {
        Some(Command::Add(cmd)) => {
            flights = add_flight(
                flights,
                cmd.destination.as_str(),
                cmd.departure_date.as_str(),
                cmd.aircraft_type.as_str(),
            );
            dirty = true;
        }
        Some(Command::Display(_)) => {
            write!(out, "{}", render_flights(&flights))?;
        }
        Some(Command::Select(cmd)) => {
            let selected = select_flights(&flights, &cmd.date);
            write!(out, "{}", render_flights(&selected))?;
        }
        None => debug!("No command given"),
    }

    if dirty {
        storage.save(&flights)?;
    } else {
        info!("No changes, leaving {} untouched", storage.path().display());
    }
    Ok(())
}
