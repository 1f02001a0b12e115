//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigin;
use crate::directory::DataLoadError;
use crate::duration::{DurationCalculator, DurationError, DurationResult};

use super::dto::{ProblemDetails, duration_request};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState, allowed_origin: &AllowedOrigin) -> Router {
    Router::new()
        .route("/", get(flight_duration).options(preflight))
        .route("/health", get(health))
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origin: &AllowedOrigin) -> CorsLayer {
    let origin = match allowed_origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Bare `OPTIONS` requests that are not CORS preflights.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Compute the flight duration described by the query string.
async fn flight_duration(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<DurationResult>, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::InvalidArgument {
        detail: e.body_text(),
    })?;

    let request = duration_request(&pairs);
    let calculator = DurationCalculator::new(&state.directory);
    let result = calculator.compute(&request)?;

    Ok(Json(result))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The caller sent something we cannot compute with
    InvalidArgument { detail: String },

    /// The airports dataset is unusable
    ///
    /// Handlers never produce this today: the directory is loaded before
    /// the listener binds and startup aborts on a [`DataLoadError`].
    Data { detail: String },

    /// Anything else; the cause is logged but never returned
    Server { cause: String },
}

impl From<DurationError> for AppError {
    fn from(e: DurationError) -> Self {
        match e {
            DurationError::Validation(err) => AppError::InvalidArgument {
                detail: err.to_string(),
            },
            DurationError::System(err) => AppError::Server {
                cause: err.to_string(),
            },
        }
    }
}

impl From<DataLoadError> for AppError {
    fn from(e: DataLoadError) -> Self {
        AppError::Data {
            detail: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, problem) = match self {
            AppError::InvalidArgument { detail } => {
                tracing::warn!(%detail, "rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    ProblemDetails {
                        kind: "/error/invalid-argument",
                        title: "Invalid Argument",
                        detail,
                    },
                )
            }
            AppError::Data { detail } => {
                tracing::error!(%detail, "airports data error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        kind: "/error/data",
                        title: "Data Error",
                        detail,
                    },
                )
            }
            AppError::Server { cause } => {
                tracing::error!(%cause, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        kind: "/error/server",
                        title: "Server Error",
                        detail: "An unexpected error occurred".to_string(),
                    },
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}
