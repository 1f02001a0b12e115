//! Duration calculation error types.

use crate::domain::{IataCode, InvalidIataCode, LocalDateTimeError};

/// A request the caller can correct.
///
/// The display text of each variant is the detail message returned to
/// clients, so it must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one parameter is absent or empty
    #[error("All parameters are required.")]
    MissingParameter,

    /// At least one parameter is present but not a single string
    #[error("All parameters must be strings.")]
    NotText,

    #[error("Invalid departure datetime format. Expected: YYYY-MM-DDTHH:MM")]
    DepartureDateTime(#[source] LocalDateTimeError),

    #[error("Invalid destination datetime format. Expected: YYYY-MM-DDTHH:MM")]
    DestinationDateTime(#[source] LocalDateTimeError),

    #[error("Invalid departure airport code. Expected: 3 uppercase letters")]
    DepartureAirportCode(#[source] InvalidIataCode),

    #[error("Invalid destination airport code. Expected: 3 uppercase letters")]
    DestinationAirportCode(#[source] InvalidIataCode),

    #[error("Unknown departure airport code: {0}")]
    UnknownDepartureAirport(IataCode),

    #[error("Unknown destination airport code: {0}")]
    UnknownDestinationAirport(IataCode),
}

/// An internal failure that is not the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SystemError {
    /// The directory returned a name the timezone database does not know
    #[error("timezone database has no zone {timezone:?} (airport {airport})")]
    UnknownTimezone { airport: IataCode, timezone: String },

    /// Date arithmetic left the supported range
    #[error("datetime out of range while localizing for airport {airport}")]
    OutOfRange { airport: IataCode },
}

/// Any failure of a duration calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    System(#[from] SystemError),
}
