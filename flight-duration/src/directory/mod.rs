//! Airport timezone directory.
//!
//! Provides IATA code → IANA timezone name mapping, built once at startup
//! from an OpenFlights-style `airports.dat` file.

mod error;
mod table;

pub use error::{DataLoadError, LookupError};
pub use table::TimezoneDirectory;
