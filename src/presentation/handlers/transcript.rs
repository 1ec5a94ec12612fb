use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{TranscriptRequest, TranscriptResult, TranscriptSource};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranscriptRequestBody {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub metadata_blob: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptResponse {
    pub transcript: String,
    pub language: String,
    pub source: TranscriptSource,
    pub error: Option<String>,
}

impl From<TranscriptRequestBody> for TranscriptRequest {
    fn from(body: TranscriptRequestBody) -> Self {
        TranscriptRequest::new(&body.platform, body.url, body.metadata_blob)
    }
}

impl From<TranscriptResult> for TranscriptResponse {
    fn from(result: TranscriptResult) -> Self {
        Self {
            error: result.error(),
            transcript: result.transcript().to_string(),
            language: result.language().to_string(),
            source: result.source(),
        }
    }
}

/// Degraded outcomes are reported in the body; this handler always answers 200.
#[tracing::instrument(skip(state, request), fields(platform = %request.platform))]
pub async fn transcript_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscriptRequestBody>,
) -> impl IntoResponse {
    let result = state
        .transcript_service
        .resolve_request(&TranscriptRequest::from(request))
        .await;

    (StatusCode::OK, Json(TranscriptResponse::from(result)))
}
