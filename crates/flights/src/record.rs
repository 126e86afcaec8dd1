//! Core flight types.
//!
//! This module defines the flight record kept in the data file and the pure
//! operations over the in-memory list: appending and selecting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A single flight entry.
///
/// All fields are free-form text. A field missing from a loaded data file
/// stays `None`: it renders as an empty string, never matches a selection and
/// is not written back on save. Keys other than the three known ones are
/// carried along untouched so that a rewrite of the file keeps them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Where the flight goes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Departure date, by convention `YYYY-MM-DD` but never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,

    /// Aircraft type, e.g. `A320`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,

    /// Any other keys found in the data file.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightRecord {
    /// Create a record with all three fields set.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        departure_date: impl Into<String>,
        aircraft_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: Some(destination.into()),
            departure_date: Some(departure_date.into()),
            aircraft_type: Some(aircraft_type.into()),
            extra: Map::new(),
        }
    }

    /// Destination, or `""` when absent.
    #[must_use]
    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    /// Departure date, or `""` when absent.
    #[must_use]
    pub fn departure_date(&self) -> &str {
        self.departure_date.as_deref().unwrap_or_default()
    }

    /// Aircraft type, or `""` when absent.
    #[must_use]
    pub fn aircraft_type(&self) -> &str {
        self.aircraft_type.as_deref().unwrap_or_default()
    }
}

/// Ordered list of flights; insertion order is preserved and duplicates are allowed.
pub type FlightList = Vec<FlightRecord>;

/// Append a new flight to the end of `flights` and hand the list back.
#[must_use]
pub fn add_flight(
    mut flights: FlightList,
    destination: impl Into<String>,
    departure_date: impl Into<String>,
    aircraft_type: impl Into<String>,
) -> FlightList {
    flights.push(FlightRecord::new(destination, departure_date, aircraft_type));
    debug!("Appended flight #{}", flights.len());
    flights
}

/// Select the flights whose aircraft type is exactly `aircraft_type`.
///
/// The comparison is case-sensitive with no normalization, original order is
/// kept, and records without an aircraft type never match.
#[must_use]
pub fn select_flights(flights: &[FlightRecord], aircraft_type: &str) -> FlightList {
    let selected: FlightList = flights
        .iter()
        .filter(|flight| flight.aircraft_type.as_deref() == Some(aircraft_type))
        .cloned()
        .collect();
    debug!(
        "Selected {} of {} flights with aircraft type {:?}",
        selected.len(),
        flights.len(),
        aircraft_type
    );
    selected
}
