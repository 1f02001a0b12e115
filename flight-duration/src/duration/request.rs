//! Untyped request input and its validation.

use crate::domain::{IataCode, LocalDateTime};

use super::error::ValidationError;

/// One request parameter as it arrived at the boundary.
///
/// Boundaries that cannot guarantee a single string per parameter (query
/// strings with repeated keys, JSON bodies) map what they received onto
/// this type, so that rejecting the wrong shape is a validation rule rather
/// than a coercion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Param {
    /// Not supplied at all
    #[default]
    Absent,

    /// A single string value
    Text(String),

    /// Supplied, but not as a single string (a list, a number, a map)
    NotText,
}

impl Param {
    /// Absent parameters, empty strings and the string `"0"` count as
    /// missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Param::Absent => true,
            Param::Text(s) => s.is_empty() || s == "0",
            Param::NotText => false,
        }
    }

    /// Returns the string value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Param::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<Option<String>> for Param {
    fn from(value: Option<String>) -> Self {
        value.map_or(Param::Absent, Param::Text)
    }
}

/// The four inputs of a duration calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationRequest {
    /// Departure wall-clock time at the departure airport
    pub from: Param,

    /// Arrival wall-clock time at the destination airport
    pub to: Param,

    /// IATA code of the departure airport
    pub departure_airport: Param,

    /// IATA code of the destination airport
    pub destination_airport: Param,
}

/// A request whose inputs all have the right shape.
///
/// The airports are well-formed codes but may still be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub from: LocalDateTime,
    pub to: LocalDateTime,
    pub departure_airport: IataCode,
    pub destination_airport: IataCode,
}

impl DurationRequest {
    /// Build a request from four strings.
    pub fn from_strs(
        from: &str,
        to: &str,
        departure_airport: &str,
        destination_airport: &str,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            departure_airport: departure_airport.into(),
            destination_airport: destination_airport.into(),
        }
    }

    fn params(&self) -> [&Param; 4] {
        [
            &self.from,
            &self.to,
            &self.departure_airport,
            &self.destination_airport,
        ]
    }

    /// Check the shape of every input.
    ///
    /// Rules are applied in a fixed order and the first violation is
    /// returned, so the same request always yields the same error.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        if self.params().iter().any(|p| p.is_missing()) {
            return Err(ValidationError::MissingParameter);
        }

        let (Some(from), Some(to), Some(departure), Some(destination)) = (
            self.from.as_text(),
            self.to.as_text(),
            self.departure_airport.as_text(),
            self.destination_airport.as_text(),
        ) else {
            return Err(ValidationError::NotText);
        };

        let from = LocalDateTime::parse(from).map_err(ValidationError::DepartureDateTime)?;
        let to = LocalDateTime::parse(to).map_err(ValidationError::DestinationDateTime)?;
        let departure_airport =
            IataCode::parse(departure).map_err(ValidationError::DepartureAirportCode)?;
        let destination_airport =
            IataCode::parse(destination).map_err(ValidationError::DestinationAirportCode)?;

        Ok(ValidatedRequest {
            from,
            to,
            departure_airport,
            destination_airport,
        })
    }
}
