//! Route handlers.

use super::error::{require_min_length, ApiError};
use super::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// === Request/Response Types ===

#[derive(Deserialize)]
pub struct VideoParams {
    video_id: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

/// Body of `POST /summarize_text`, also accepted as `GET` query parameters.
#[derive(Deserialize)]
pub struct SummarizeTextRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    video_id: String,
    transcript: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    video_id: String,
    summary: String,
}

#[derive(Serialize)]
pub struct SummaryTextResponse {
    text: String,
    summary: String,
}

const TRANSCRIPT_NOT_FOUND: &str = "Transcript not found or empty";
const SUMMARY_NOT_GENERATED: &str = "Summary could not be generated";

// === Handlers ===

pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoParams>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let video_id = require_min_length("video_id", params.video_id)?;

    match state.orchestrator.fetcher().fetch_transcript(&video_id).await {
        Ok(transcript) if transcript.is_empty() => {
            Err(ApiError::NotFound(TRANSCRIPT_NOT_FOUND.to_string()))
        }
        Ok(transcript) => Ok(Json(TranscriptResponse {
            video_id,
            transcript,
        })),
        Err(e) => {
            warn!("Transcript fetch for {} failed: {}", video_id, e);
            Err(e.into())
        }
    }
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let video_id = require_min_length("video_id", params.video_id)?;

    match state
        .orchestrator
        .summarize_video(&video_id, params.model.as_deref())
        .await
    {
        Ok(summary) if summary.is_empty() => {
            Err(ApiError::NotFound(SUMMARY_NOT_GENERATED.to_string()))
        }
        Ok(summary) => {
            info!("Summarized video {}", video_id);
            Ok(Json(SummaryResponse { video_id, summary }))
        }
        Err(e) => {
            warn!("Summary for {} failed: {}", video_id, e);
            Err(e.into())
        }
    }
}

pub async fn summarize_text_json(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeTextRequest>,
) -> Result<Json<SummaryTextResponse>, ApiError> {
    summarize_text(&state, req).await
}

pub async fn summarize_text_query(
    State(state): State<Arc<AppState>>,
    Query(req): Query<SummarizeTextRequest>,
) -> Result<Json<SummaryTextResponse>, ApiError> {
    summarize_text(&state, req).await
}

async fn summarize_text(
    state: &AppState,
    req: SummarizeTextRequest,
) -> Result<Json<SummaryTextResponse>, ApiError> {
    let text = require_min_length("text", req.text)?;

    match state
        .orchestrator
        .summarizer()
        .summarize(&text, req.model.as_deref())
        .await
    {
        Ok(summary) if summary.is_empty() => {
            Err(ApiError::NotFound(SUMMARY_NOT_GENERATED.to_string()))
        }
        Ok(summary) => Ok(Json(SummaryTextResponse { text, summary })),
        Err(e) => {
            warn!("Text summary failed: {}", e);
            Err(e.into())
        }
    }
}
