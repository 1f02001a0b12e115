//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::duration::{DurationRequest, Param};

/// Query parameter carrying the departure datetime.
pub const FROM_PARAM: &str = "from";

/// Query parameter carrying the arrival datetime.
pub const TO_PARAM: &str = "to";

/// Query parameter carrying the departure airport code.
pub const DEPARTURE_PARAM: &str = "departureAirport";

/// Query parameter carrying the destination airport code.
pub const DESTINATION_PARAM: &str = "destinationAirport";

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    /// Error category, e.g. `/error/invalid-argument`
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Short human-readable category name
    pub title: &'static str,

    /// What went wrong
    pub detail: String,
}

/// Build a duration request from raw query pairs.
///
/// When a key appears more than once the last occurrence wins. A key in
/// array form (`from[]=…` or `from[0]=…`) makes the parameter a non-string.
pub fn duration_request(pairs: &[(String, String)]) -> DurationRequest {
    DurationRequest {
        from: query_param(pairs, FROM_PARAM),
        to: query_param(pairs, TO_PARAM),
        departure_airport: query_param(pairs, DEPARTURE_PARAM),
        destination_airport: query_param(pairs, DESTINATION_PARAM),
    }
}

fn query_param(pairs: &[(String, String)], name: &str) -> Param {
    pairs
        .iter()
        .rev()
        .find_map(|(key, value)| {
            if key == name {
                Some(Param::Text(value.clone()))
            } else if key.strip_prefix(name)?.starts_with('[') {
                Some(Param::NotText)
            } else {
                None
            }
        })
        .unwrap_or(Param::Absent)
}
