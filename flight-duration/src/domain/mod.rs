//! Domain types for the flight duration service.
//!
//! These types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod airport;
mod local_time;

pub use airport::{IataCode, InvalidIataCode};
pub use local_time::{LocalDateTime, LocalDateTimeError};
