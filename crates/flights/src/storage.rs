//! Storage layer for flights.
//!
//! The whole flight list lives in a single JSON file. Every load reads the
//! entire file and every save rewrites it; there are no partial updates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{FlightList, FlightRecord};

/// Indentation used when writing the data file.
const INDENT: &[u8] = b"    ";

/// JSON file backing a flight list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    /// Path to the data file.
    path: PathBuf,
}

impl Storage {
    /// Create a storage handle for the given data file.
    ///
    /// Nothing is touched on disk until [`Storage::load`] or [`Storage::save`].
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the whole data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is absent, unreadable, or not a JSON array
    /// of flight records.
    pub fn load(&self) -> Result<FlightList> {
        debug!("Loading flights from {}", self.path.display());
        let text = fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;
        let flights: FlightList = serde_json::from_str(&text).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        info!("Loaded {} flights from {}", flights.len(), self.path.display());
        Ok(flights)
    }

    /// Load the data file if it exists, otherwise start with an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_or_default(&self) -> Result<FlightList> {
        if self.exists() {
            self.load()
        } else {
            debug!("{} does not exist, starting empty", self.path.display());
            Ok(FlightList::new())
        }
    }

    /// Overwrite the data file with the full flight list.
    ///
    /// Output is UTF-8 JSON indented by four spaces with non-ASCII characters
    /// written literally.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, flights: &[FlightRecord]) -> Result<()> {
        let bytes = encode(flights)?;
        fs::write(&self.path, bytes).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved {} flights to {}", flights.len(), self.path.display());
        Ok(())
    }
}

/// Serialize flights into the bytes stored on disk.
fn encode(flights: &[FlightRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    flights.serialize(&mut ser)?;
    Ok(buf)
}
