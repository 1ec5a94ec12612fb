mod audio_downloader;
mod audio_transcriber;
mod transcription_engine;

pub use audio_downloader::{AudioDownloader, DownloadError};
pub use audio_transcriber::AudioTranscriber;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
