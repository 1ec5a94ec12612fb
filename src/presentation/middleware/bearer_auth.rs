use axum::Json;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Server API key not configured")]
    Misconfigured,
    #[error("Unauthorized")]
    Unauthorized,
}

#[derive(Serialize)]
pub struct AuthErrorResponse {
    pub detail: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            AuthError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        };
        (
            status,
            Json(AuthErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Rejects requests whose bearer token does not match the configured key.
/// Runs before the body is read, so rejected requests do no work.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    check_bearer(request.headers(), state.api_key())?;
    Ok(next.run(request).await)
}

pub fn check_bearer(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    if expected.is_empty() {
        tracing::error!("Rejecting request: server API key not configured");
        return Err(AuthError::Misconfigured);
    }

    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX));

    match provided {
        Some(token) if token == expected => Ok(()),
        Some(_) => {
            tracing::warn!("Rejecting request: bearer token mismatch");
            Err(AuthError::Unauthorized)
        }
        None => {
            tracing::warn!("Rejecting request: missing bearer token");
            Err(AuthError::Unauthorized)
        }
    }
}
