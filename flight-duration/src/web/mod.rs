//! Web layer for the flight duration service.
//!
//! Exposes the duration calculation over HTTP with JSON responses.

mod dto;
mod routes;
mod state;

pub use dto::{ProblemDetails, duration_request};
pub use routes::{AppError, create_router};
pub use state::AppState;
