use std::sync::Arc;

use vidscript::application::ports::{AudioTranscriber, DownloadError, TranscriptionError};
use vidscript::application::services::AudioPipeline;
use vidscript::domain::AudioClip;

use crate::helpers::{FakeDownloader, FakeEngine};

const MAX_AUDIO_BYTES: usize = 1024;

#[tokio::test]
async fn given_downloaded_clip_when_transcribing_url_then_returns_engine_text() {
    let engine = Arc::new(FakeEngine::returning("recognized speech"));
    let pipeline = AudioPipeline::new(
        Arc::new(FakeDownloader::with_clip(AudioClip::new(vec![1; 16], "audio.m4a"))),
        engine.clone(),
        MAX_AUDIO_BYTES,
    );

    let text = pipeline
        .transcribe_url("https://youtu.be/abc")
        .await
        .unwrap();

    assert_eq!(text, "recognized speech");
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn given_download_failure_when_transcribing_url_then_returns_download_error() {
    let engine = Arc::new(FakeEngine::returning("unused"));
    let pipeline = AudioPipeline::new(
        Arc::new(FakeDownloader::failing()),
        engine.clone(),
        MAX_AUDIO_BYTES,
    );

    let result = pipeline.transcribe_url("https://youtu.be/abc").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::Download(DownloadError::Failed(_)))
    ));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn given_oversized_clip_when_transcribing_url_then_rejects_before_engine() {
    let engine = Arc::new(FakeEngine::returning("unused"));
    let pipeline = AudioPipeline::new(
        Arc::new(FakeDownloader::with_clip(AudioClip::new(
            vec![0; MAX_AUDIO_BYTES + 1],
            "audio.webm",
        ))),
        engine.clone(),
        MAX_AUDIO_BYTES,
    );

    let result = pipeline.transcribe_url("https://youtu.be/abc").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::AudioTooLarge {
            size_bytes,
            limit_bytes: MAX_AUDIO_BYTES,
        }) if size_bytes == MAX_AUDIO_BYTES + 1
    ));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn given_unknown_file_type_when_transcribing_url_then_returns_unsupported_format() {
    let pipeline = AudioPipeline::new(
        Arc::new(FakeDownloader::with_clip(AudioClip::new(vec![1; 8], "audio.bin"))),
        Arc::new(FakeEngine::returning("unused")),
        MAX_AUDIO_BYTES,
    );

    let result = pipeline.transcribe_url("https://youtu.be/abc").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::UnsupportedFormat(name)) if name == "audio.bin"
    ));
}

#[test]
fn given_audio_extensions_when_building_clip_then_infers_mime() {
    assert_eq!(AudioClip::new(vec![], "a.m4a").mime_type, "audio/mp4");
    assert_eq!(AudioClip::new(vec![], "a.WEBM").mime_type, "audio/webm");
    assert_eq!(AudioClip::new(vec![], "a.opus").mime_type, "audio/ogg");
    assert_eq!(AudioClip::new(vec![], "a").mime_type, "application/octet-stream");
}
