//! IATA airport codes.
//!
//! Callers name airports by the three-letter IATA location identifier, the
//! same code the airports dataset carries in its fifth column (`"FRA"`,
//! `"JFK"`). Whether a well-formed code names an airport we know about is
//! decided later, against the timezone directory.

use std::fmt;

/// Why a string is not an IATA code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIataCode {
    #[error("IATA codes have 3 letters, got {0} bytes")]
    Length(usize),

    #[error("IATA codes use only the letters A-Z")]
    Alphabet,
}

/// A well-formed IATA airport code.
///
/// ```
/// use flight_duration::domain::IataCode;
///
/// assert_eq!(IataCode::parse("HKT").unwrap().as_str(), "HKT");
/// assert!(IataCode::parse("hkt").is_err());
/// assert!(IataCode::parse("VTSP").is_err()); // ICAO, not IATA
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse a code exactly as given; lowercase input is not folded.
    pub fn parse(s: &str) -> Result<Self, InvalidIataCode> {
        let letters: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidIataCode::Length(s.len()))?;

        if letters.iter().all(u8::is_ascii_uppercase) {
            Ok(Self(letters))
        } else {
            Err(InvalidIataCode::Alphabet)
        }
    }

    pub fn as_str(&self) -> &str {
        // A-Z only
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
