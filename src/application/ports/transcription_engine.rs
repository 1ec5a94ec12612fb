use async_trait::async_trait;

use crate::domain::AudioClip;

use super::audio_downloader::DownloadError;

/// Speech-to-text backend.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),
    #[error("audio too large: {size_bytes} bytes exceeds limit of {limit_bytes} bytes")]
    AudioTooLarge { size_bytes: usize, limit_bytes: usize },
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine not configured: {0}")]
    NotConfigured(String),
}
