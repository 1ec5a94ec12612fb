use std::fmt;

/// What happened on the audio transcription path of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    /// The engine returned non-empty text.
    Transcribed,
    /// The engine succeeded but produced no text.
    Empty,
    /// Download or transcription failed with the given detail.
    Failed(String),
    /// The platform has no audio path.
    UnsupportedPlatform,
    /// No speech-to-text credentials are configured.
    Unavailable,
}

impl AudioOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioOutcome::Transcribed => "transcribed",
            AudioOutcome::Empty => "empty",
            AudioOutcome::Failed(_) => "failed",
            AudioOutcome::UnsupportedPlatform => "unsupported_platform",
            AudioOutcome::Unavailable => "unavailable",
        }
    }

    pub fn failure_detail(&self) -> Option<&str> {
        match self {
            AudioOutcome::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for AudioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
