use async_trait::async_trait;

use super::transcription_engine::TranscriptionError;

/// Turns a video URL into recognized speech.
#[async_trait]
pub trait AudioTranscriber: Send + Sync {
    async fn transcribe_url(&self, url: &str) -> Result<String, TranscriptionError>;
}
