//! `flights` - Record, list and filter flights kept in a JSON file
//!
//! This library provides the flight record model, the whole-file JSON
//! storage, table rendering and the command dispatch used by the `flights`
//! binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod logging;
pub mod record;
pub mod storage;

pub use config::Config;
pub use display::render_flights;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{add_flight, select_flights, FlightList, FlightRecord};
pub use storage::Storage;
