mod audio_clip;
mod audio_outcome;
mod platform;
mod snippet_metadata;
mod transcript_request;
mod transcript_result;
mod transcript_source;

pub use audio_clip::AudioClip;
pub use audio_outcome::AudioOutcome;
pub use platform::Platform;
pub use snippet_metadata::{SnippetMetadata, extract_snippet_text};
pub use transcript_request::TranscriptRequest;
pub use transcript_result::{
    AUDIO_EMPTY_OR_FAILED, EMPTY_SNIPPET_AND_AUDIO, TranscriptResult, UNKNOWN_LANGUAGE,
    WHISPER_ERROR_PREFIX,
};
pub use transcript_source::TranscriptSource;
