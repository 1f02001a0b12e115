//! Runtime configuration for the server.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

/// Environment variable holding the listen address.
pub const BIND_ENV: &str = "FLIGHT_DURATION_BIND";

/// Environment variable holding the airports data file path.
pub const AIRPORTS_ENV: &str = "FLIGHT_DURATION_AIRPORTS";

/// Environment variable holding the allowed CORS origin.
pub const CORS_ORIGIN_ENV: &str = "FLIGHT_DURATION_CORS_ORIGIN";

/// Default airports data location, relative to the working directory.
const DEFAULT_AIRPORTS_PATH: &str = "var/data/airports.dat";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address could not be parsed
    #[error("invalid FLIGHT_DURATION_BIND {value:?}: expected host:port")]
    InvalidBindAddr { value: String },

    /// The CORS origin is not usable as a header value
    #[error("invalid FLIGHT_DURATION_CORS_ORIGIN {value:?}")]
    InvalidOrigin { value: String },
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigin {
    /// `Access-Control-Allow-Origin: *`
    #[default]
    Any,

    /// A single exact origin, e.g. `https://example.com`
    Exact(HeaderValue),
}

impl AllowedOrigin {
    /// Allow a single origin.
    ///
    /// The origin must be non-empty printable ASCII without spaces.
    pub fn exact(origin: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidOrigin {
            value: origin.to_string(),
        };
        if origin.is_empty() || !origin.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(invalid());
        }
        HeaderValue::from_str(origin)
            .map(AllowedOrigin::Exact)
            .map_err(|_| invalid())
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim() {
            "*" => Ok(AllowedOrigin::Any),
            origin => Self::exact(origin),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Path to the OpenFlights-style airports data file.
    pub airports_path: PathBuf,

    /// CORS origin policy.
    pub allowed_origin: AllowedOrigin,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ENV) {
            let parsed = value.trim().parse::<SocketAddr>();
            config.bind_addr = parsed.map_err(|_| ConfigError::InvalidBindAddr { value })?;
        }

        if let Some(value) = lookup(AIRPORTS_ENV).filter(|v| !v.trim().is_empty()) {
            config.airports_path = PathBuf::from(value);
        }

        if let Some(value) = lookup(CORS_ORIGIN_ENV) {
            config.allowed_origin = AllowedOrigin::parse(&value)?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            airports_path: PathBuf::from(DEFAULT_AIRPORTS_PATH),
            allowed_origin: AllowedOrigin::Any,
        }
    }
}
