/*!
 * HTTP surface.
 *
 * All routes live under `/api`:
 * - `GET  /api/health`
 * - `POST /api/translate`
 * - `POST /api/vocab/detail`
 * - `POST /api/debug/split`
 */

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, warn};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::errors::AppError;
use crate::service::NoteService;

pub mod routes;

/// Prefix shared by every route
pub const API_PREFIX: &str = "/api";

/// Build the application router
pub fn router(service: Arc<NoteService>, frontend_origin: &str) -> Result<Router> {
    let api = Router::new()
        .route("/health", get(routes::health))
        .route("/translate", post(routes::translate))
        .route("/vocab/detail", post(routes::vocab_detail))
        .route("/debug/split", post(routes::debug_split));

    Ok(Router::new()
        .nest(API_PREFIX, api)
        .layer(cors_layer(frontend_origin)?)
        .with_state(service))
}

/// CORS for a single allowed origin, with credentials
pub fn cors_layer(frontend_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(frontend_origin.trim_end_matches('/'))
        .with_context(|| format!("Invalid frontend origin: {}", frontend_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Serve `app` on `listener` until ctrl-c
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            error!("{} {}", status.as_u16(), detail);
        } else {
            warn!("{} {}", status.as_u16(), detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
