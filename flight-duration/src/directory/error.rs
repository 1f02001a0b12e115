//! Timezone directory error types.

use std::path::PathBuf;

/// Errors that can occur while building the directory.
///
/// All of these are fatal: the service must not start serving with a
/// directory it could not build.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The dataset file does not exist
    #[error("airports data file not found at: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The dataset file exists but could not be read
    #[error("could not read airports data file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a non-file source failed
    #[error("could not read airports data: {0}")]
    Io(#[from] std::io::Error),

    /// No row survived filtering
    #[error("no valid timezone data found in airports file")]
    Empty,
}

/// Returned when an airport code has no directory entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown airport code: {code}")]
pub struct LookupError {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DataLoadError::NotFound {
            path: PathBuf::from("var/data/airports.dat"),
        };
        assert_eq!(
            err.to_string(),
            "airports data file not found at: var/data/airports.dat"
        );

        let err = DataLoadError::Read {
            path: PathBuf::from("airports.dat"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "could not read airports data file airports.dat: denied"
        );

        let err = DataLoadError::Empty;
        assert_eq!(
            err.to_string(),
            "no valid timezone data found in airports file"
        );

        let err = LookupError {
            code: "XXX".to_string(),
        };
        assert_eq!(err.to_string(), "unknown airport code: XXX");
    }
}
