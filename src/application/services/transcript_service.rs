use std::sync::Arc;

use crate::application::ports::AudioTranscriber;
use crate::domain::{
    AudioOutcome, Platform, TranscriptRequest, TranscriptResult, extract_snippet_text,
};
use crate::infrastructure::observability::{redact_secrets, truncate_for_log};

/// Resolves a transcript for a video, preferring recognized speech and
/// falling back to catalog metadata.
///
/// Never fails: problems on the audio path are recorded in the result.
pub struct TranscriptService {
    transcriber: Option<Arc<dyn AudioTranscriber>>,
}

impl TranscriptService {
    pub fn new(transcriber: Arc<dyn AudioTranscriber>) -> Self {
        Self {
            transcriber: Some(transcriber),
        }
    }

    /// Service with no speech-to-text backend; every request uses the metadata fallback.
    pub fn without_audio() -> Self {
        Self { transcriber: None }
    }

    pub fn has_audio(&self) -> bool {
        self.transcriber.is_some()
    }

    pub async fn resolve(
        &self,
        platform: &str,
        url: &str,
        metadata_blob: Option<&str>,
    ) -> TranscriptResult {
        let platform = Platform::parse(platform);

        let audio = match self.transcribe_audio(&platform, url).await {
            Ok(text) => return TranscriptResult::from_audio(text),
            Err(outcome) => outcome,
        };

        let result = TranscriptResult::from_fallback(extract_snippet_text(metadata_blob), audio);

        tracing::info!(
            platform = %platform,
            audio_outcome = %result.audio(),
            source = %result.source(),
            chars = result.transcript().len(),
            "Transcript resolved from fallback"
        );

        result
    }

    pub async fn resolve_request(&self, request: &TranscriptRequest) -> TranscriptResult {
        self.resolve(
            request.platform.as_str(),
            &request.url,
            request.metadata_blob.as_deref(),
        )
        .await
    }

    /// Returns trimmed non-empty text, or the outcome explaining why there is none.
    async fn transcribe_audio(
        &self,
        platform: &Platform,
        url: &str,
    ) -> Result<String, AudioOutcome> {
        if !platform.supports_audio() {
            return Err(AudioOutcome::UnsupportedPlatform);
        }

        let Some(transcriber) = self.transcriber.as_ref() else {
            tracing::debug!("No speech-to-text backend configured, skipping audio");
            return Err(AudioOutcome::Unavailable);
        };

        match transcriber.transcribe_url(url).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::info!("Audio transcription returned no text");
                    Err(AudioOutcome::Empty)
                } else {
                    tracing::info!(chars = text.len(), "Transcript resolved from audio");
                    Ok(text.to_string())
                }
            }
            Err(e) => {
                let detail = redact_secrets(&e.to_string());
                tracing::warn!(
                    error = %truncate_for_log(&detail),
                    "Audio transcription failed"
                );
                Err(AudioOutcome::Failed(detail))
            }
        }
    }
}
