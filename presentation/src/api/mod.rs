//! HTTP API
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /api/evaluate` | [`evaluate::evaluate`] |
//! | `GET /api/models` | [`catalog::list_models`] |
//! | `GET /api/rubrics` | [`catalog::list_rubrics`] |
//! | `GET /health` | [`health::health_check`] |

pub mod catalog;
pub mod evaluate;
pub mod health;

use arena_application::{RunEvaluationError, RunEvaluationUseCase};
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

/// Body returned for every non-2xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Detail is logged, never returned to the client
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RunEvaluationError> for ApiError {
    fn from(error: RunEvaluationError) -> Self {
        match error {
            RunEvaluationError::InvalidPrompt(reason) => ApiError::BadRequest(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub evaluation: Arc<RunEvaluationUseCase>,
    /// Whether the gateway has credentials; reported by `/health`
    pub gateway_configured: bool,
}

impl AppState {
    pub fn new(evaluation: Arc<RunEvaluationUseCase>, gateway_configured: bool) -> Self {
        Self {
            evaluation,
            gateway_configured,
        }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/evaluate", post(evaluate::evaluate))
        .route("/api/models", get(catalog::list_models))
        .route("/api/rubrics", get(catalog::list_rubrics))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
