use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;

use vidscript::application::ports::{TranscriptionEngine, TranscriptionError};
use vidscript::domain::AudioClip;
use vidscript::infrastructure::audio::AzureWhisperEngine;

use super::mock_server::start_mock_server;

fn azure_app(status: u16, body: &'static str) -> Router {
    Router::new().route(
        "/openai/deployments/my-deployment/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }),
    )
}

fn clip() -> AudioClip {
    AudioClip::new(b"fake audio bytes".to_vec(), "audio.webm")
}

#[tokio::test]
async fn given_valid_audio_when_azure_transcribes_then_returns_text() {
    let (base_url, shutdown_tx) =
        start_mock_server(azure_app(200, r#"{"text": " Hello from Azure "}"#)).await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");

    let result = engine.transcribe(&clip()).await;

    assert_eq!(result.unwrap(), "Hello from Azure");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(azure_app(400, r#"{"error": {"code": "InvalidRequest"}}"#)).await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");

    let result = engine.transcribe(&clip()).await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_response_without_text_when_transcribing_then_returns_empty_string() {
    let (base_url, shutdown_tx) = start_mock_server(azure_app(200, r#"{}"#)).await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");

    let result = engine.transcribe(&clip()).await;

    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_non_json_body_when_transcribing_then_returns_parse_error() {
    let (base_url, shutdown_tx) = start_mock_server(azure_app(200, "plain text")).await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");

    let result = engine.transcribe(&clip()).await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(detail)) => {
            assert!(detail.starts_with("parse response"))
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}
