use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use log::info;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::service::NoteService;
use crate::translation::{SplitResponse, TranslateRequest, TranslateResponse};
use crate::vocab::{VocabDetail, VocabDetailRequest};

// ─── Handlers ────────────────────────────────────────────────

/// `GET /api/health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/translate`
pub async fn translate(
    State(service): State<Arc<NoteService>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let response = service.translate_text(&request).await?;
    info!("Translated {} sentence(s)", response.sentences.len());
    Ok(Json(response))
}

/// `POST /api/vocab/detail`
pub async fn vocab_detail(
    State(service): State<Arc<NoteService>>,
    Json(request): Json<VocabDetailRequest>,
) -> Result<Json<VocabDetail>, AppError> {
    Ok(Json(service.vocab_detail(&request).await?))
}

/// `POST /api/debug/split`
pub async fn debug_split(
    State(service): State<Arc<NoteService>>,
    Json(request): Json<TranslateRequest>,
) -> Json<SplitResponse> {
    Json(service.split(&request.text))
}
