//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::TimezoneDirectory;

/// Shared application state.
///
/// The directory is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Airport code to timezone lookup
    pub directory: Arc<TimezoneDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: TimezoneDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
