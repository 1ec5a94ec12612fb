use super::audio_outcome::AudioOutcome;
use super::transcript_source::TranscriptSource;

pub const UNKNOWN_LANGUAGE: &str = "unknown";

pub const WHISPER_ERROR_PREFIX: &str = "whisper_error: ";
pub const AUDIO_EMPTY_OR_FAILED: &str = "audio_empty_or_failed";
pub const EMPTY_SNIPPET_AND_AUDIO: &str = "empty_snippet_and_audio";

/// Outcome of resolving a transcript for one request.
///
/// The diagnostic string exposed to clients is derived from `source` and
/// `audio`, so a failed transcription always surfaces as `whisper_error:`
/// regardless of whether the metadata fallback produced text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptResult {
    transcript: String,
    language: String,
    source: TranscriptSource,
    audio: AudioOutcome,
}

impl TranscriptResult {
    pub fn from_audio(transcript: String) -> Self {
        Self {
            transcript,
            language: UNKNOWN_LANGUAGE.to_string(),
            source: TranscriptSource::Whisper,
            audio: AudioOutcome::Transcribed,
        }
    }

    /// Builds a result after the audio path produced nothing. An empty
    /// `snippet_text` yields source `none`.
    pub fn from_fallback(snippet_text: String, audio: AudioOutcome) -> Self {
        let source = if snippet_text.is_empty() {
            TranscriptSource::None
        } else {
            TranscriptSource::SnippetFallback
        };

        Self {
            transcript: snippet_text,
            language: UNKNOWN_LANGUAGE.to_string(),
            source,
            audio,
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn source(&self) -> TranscriptSource {
        self.source
    }

    pub fn audio(&self) -> &AudioOutcome {
        &self.audio
    }

    pub fn error(&self) -> Option<String> {
        if let Some(detail) = self.audio.failure_detail() {
            return Some(format!("{}{}", WHISPER_ERROR_PREFIX, detail));
        }

        match self.source {
            TranscriptSource::Whisper => None,
            TranscriptSource::SnippetFallback => Some(AUDIO_EMPTY_OR_FAILED.to_string()),
            TranscriptSource::None => Some(EMPTY_SNIPPET_AND_AUDIO.to_string()),
        }
    }
}
