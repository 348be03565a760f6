//! Web form: one route, GET renders the form, POST screens two uploads

pub mod flash;
pub mod handlers;

use crate::config::Config;
use crate::error::ScreenerError;
use crate::processing::Screener;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{info, warn};
use serde_json::json;

/// Shared per-process state: the pre-loaded tag model (inside the
/// screener, read-only after startup) and the session secret.
#[derive(Clone)]
pub struct AppState {
    pub screener: Screener,
    pub config: Config,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::screen))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(host: &str, port: u16, state: AppState) -> crate::Result<()> {
    if state.config.uses_default_secret() {
        warn!("SESSION_SECRET not set; using the development fallback");
    }

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Listening on {host}:{port}");
    axum::serve(listener, build_router(state))
        .await
        .map_err(ScreenerError::Io)
}

impl IntoResponse for ScreenerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ScreenerError::MissingUpload(_) => (StatusCode::BAD_REQUEST, "MISSING_UPLOAD"),
            ScreenerError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ScreenerError::EmptyCorpus => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CORPUS"),
            ScreenerError::Io(_)
            | ScreenerError::ModelLoad(_)
            | ScreenerError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            log::error!("request failed: {self}");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
