use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    AudioDownloader, AudioTranscriber, TranscriptionEngine, TranscriptionError,
};

const OCTET_STREAM: &str = "application/octet-stream";

/// Downloads audio for a URL and hands it to a speech-to-text engine.
pub struct AudioPipeline {
    downloader: Arc<dyn AudioDownloader>,
    engine: Arc<dyn TranscriptionEngine>,
    max_audio_bytes: usize,
}

impl AudioPipeline {
    pub fn new(
        downloader: Arc<dyn AudioDownloader>,
        engine: Arc<dyn TranscriptionEngine>,
        max_audio_bytes: usize,
    ) -> Self {
        Self {
            downloader,
            engine,
            max_audio_bytes,
        }
    }
}

#[async_trait]
impl AudioTranscriber for AudioPipeline {
    #[tracing::instrument(skip(self))]
    async fn transcribe_url(&self, url: &str) -> Result<String, TranscriptionError> {
        let clip = self.downloader.download(url).await?;

        tracing::debug!(
            file_name = %clip.file_name,
            mime_type = %clip.mime_type,
            bytes = clip.size_bytes(),
            "Audio downloaded"
        );

        if clip.mime_type == OCTET_STREAM {
            return Err(TranscriptionError::UnsupportedFormat(clip.file_name));
        }

        if clip.size_bytes() > self.max_audio_bytes {
            return Err(TranscriptionError::AudioTooLarge {
                size_bytes: clip.size_bytes(),
                limit_bytes: self.max_audio_bytes,
            });
        }

        self.engine.transcribe(&clip).await
    }
}
