use async_trait::async_trait;

use crate::domain::AudioClip;

/// Fetches the best available audio stream for a video URL.
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    async fn download(&self, url: &str) -> Result<AudioClip, DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("downloader binary not found: {0}")]
    BinaryNotFound(String),
    #[error("downloader failed: {0}")]
    Failed(String),
    #[error("download timed out after {0}s")]
    TimedOut(u64),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
