//! Flight duration calculation.
//!
//! Validates the four request inputs, resolves both airports to their
//! timezones, and measures the absolute time between the two localized
//! instants.

mod calculator;
mod elapsed;
mod error;
mod request;

pub use calculator::{DurationCalculator, DurationResult};
pub use elapsed::ElapsedDuration;
pub use error::{DurationError, SystemError, ValidationError};
pub use request::{DurationRequest, Param, ValidatedRequest};
