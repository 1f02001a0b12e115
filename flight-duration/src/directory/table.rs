//! Airport code to timezone lookup.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::error::{DataLoadError, LookupError};

/// Index of the IATA code column in the airports dataset.
const IATA_FIELD: usize = 4;

/// Index of the IANA timezone column in the airports dataset.
const TZ_FIELD: usize = 11;

/// Rows shorter than this are ignored.
const MIN_FIELDS: usize = TZ_FIELD + 1;

/// Literal marker the dataset uses for a missing value.
const NULL_MARKER: &str = "\\N";

/// Immutable IATA code → IANA timezone name mapping.
///
/// Built once from the airports dataset and never mutated afterwards, so a
/// single instance can be shared by every request without locking.
#[derive(Debug, Clone)]
pub struct TimezoneDirectory {
    timezones: HashMap<String, String>,
}

impl TimezoneDirectory {
    /// Load the directory from an airports data file.
    ///
    /// Fails if the file is missing, unreadable, or holds no usable rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let read_error = |source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(read_error)?;
        let timezones = parse_rows(file).map_err(read_error)?;

        let directory = Self::from_map(timezones)?;
        tracing::info!(
            path = %path.display(),
            airports = directory.len(),
            "loaded timezone directory"
        );
        Ok(directory)
    }

    /// Build the directory from any reader producing airports rows.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, DataLoadError> {
        Self::from_map(parse_rows(reader)?)
    }

    fn from_map(timezones: HashMap<String, String>) -> Result<Self, DataLoadError> {
        let directory = Self { timezones };
        if directory.is_empty() {
            return Err(DataLoadError::Empty);
        }
        Ok(directory)
    }

    /// Look up the timezone name for an airport code.
    pub fn resolve(&self, code: &str) -> Result<&str, LookupError> {
        self.timezones
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| LookupError {
                code: code.to_string(),
            })
    }

    /// Check whether an airport code is known.
    pub fn contains(&self, code: &str) -> bool {
        self.timezones.contains_key(code)
    }

    /// Get the number of airports in the directory.
    pub fn len(&self) -> usize {
        self.timezones.len()
    }

    /// Check if the directory is empty.
    ///
    /// Always false for a directory that was built successfully.
    pub fn is_empty(&self) -> bool {
        self.timezones.is_empty()
    }
}

/// Parse airports rows into the code → timezone map.
///
/// A row is kept when it has at least 12 fields, a timezone that is not the
/// null marker, and a non-empty code. Later rows win over earlier ones with
/// the same code. Inside quoted fields a backslash escapes the next
/// character; the dataset writes its null marker unquoted, where the
/// backslash stays literal.
fn parse_rows(reader: impl io::Read) -> io::Result<HashMap<String, String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .escape(Some(b'\\'))
        .from_reader(reader);

    let mut timezones = HashMap::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(match e.into_kind() {
                    csv::ErrorKind::Io(err) => err,
                    other => io::Error::other(format!("{other:?}")),
                });
            }
            Err(e) => {
                tracing::warn!(
                    line = e.position().map(|p| p.line()),
                    error = %e,
                    "skipping malformed airports row"
                );
                continue;
            }
        };

        if record.len() < MIN_FIELDS {
            continue;
        }
        let code = &record[IATA_FIELD];
        let timezone = &record[TZ_FIELD];
        if timezone == NULL_MARKER || code.is_empty() {
            continue;
        }
        timezones.insert(code.to_string(), timezone.to_string());
    }

    Ok(timezones)
}
