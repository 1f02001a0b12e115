use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flight_duration::config::{ConfigError, ServerConfig};
use flight_duration::directory::{DataLoadError, TimezoneDirectory};
use flight_duration::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "flight_duration=info,tower_http=info";

/// Reasons the server can fail to start or keep running.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load airports data: {0}")]
    Data(#[from] DataLoadError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Refuse to serve without a usable directory
    let directory = TimezoneDirectory::load(&config.airports_path)?;

    let state = AppState::new(directory);
    let app = create_router(state, &config.allowed_origin);

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!("Flight duration API listening on http://{addr}");
    tracing::info!("  GET  /        - Compute a flight duration");
    tracing::info!("  GET  /health  - Health check");

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
