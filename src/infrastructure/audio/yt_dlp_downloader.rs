use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::{NamedTempFile, TempDir};
use tokio::process::Command;

use crate::application::ports::{AudioDownloader, DownloadError};
use crate::domain::AudioClip;
use crate::infrastructure::observability::redact_secrets;

const MAX_STDERR_CHARS: usize = 1000;
const OUTPUT_TEMPLATE: &str = "audio.%(ext)s";

/// Downloads the best audio stream of a video with the `yt-dlp` binary.
///
/// Cookies and the downloaded file live in temporary files that are removed
/// when the download call returns.
pub struct YtDlpDownloader {
    binary: String,
    cookies: Option<String>,
    timeout: Duration,
}

impl YtDlpDownloader {
    pub fn new(binary: impl Into<String>, cookies: Option<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            cookies: cookies.filter(|c| !c.trim().is_empty()),
            timeout,
        }
    }

    pub fn has_cookies(&self) -> bool {
        self.cookies.is_some()
    }

    /// Runs `--version` under the download timeout and returns the reported version.
    pub async fn verify(&self) -> Result<String, DownloadError> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.binary)
                .arg("--version")
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| DownloadError::TimedOut(self.timeout.as_secs()))?
        .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(DownloadError::BinaryNotFound(self.binary.clone()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn spawn_error(&self, e: std::io::Error) -> DownloadError {
        if e.kind() == std::io::ErrorKind::NotFound {
            DownloadError::BinaryNotFound(self.binary.clone())
        } else {
            DownloadError::Io(e)
        }
    }

    fn write_cookies(&self) -> Result<Option<NamedTempFile>, DownloadError> {
        let Some(cookies) = self.cookies.as_deref() else {
            return Ok(None);
        };

        let mut file = NamedTempFile::new()?;
        file.write_all(cookies.as_bytes())?;
        if !cookies.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        file.flush()?;

        Ok(Some(file))
    }

    async fn fetch(
        &self,
        url: &str,
        output_dir: &Path,
        cookies: Option<&Path>,
    ) -> Result<PathBuf, DownloadError> {
        let mut command = Command::new(&self.binary);
        command
            .args([
                "--format",
                "bestaudio/best",
                "--no-playlist",
                "--no-exec",
                "--no-progress",
                "--paths",
            ])
            .arg(output_dir)
            .args(["--output", OUTPUT_TEMPLATE, "--print", "after_move:filepath"])
            .kill_on_drop(true);

        if let Some(path) = cookies {
            command.arg("--cookies").arg(path);
        }

        let output = tokio::time::timeout(self.timeout, command.arg(url).output())
            .await
            .map_err(|_| DownloadError::TimedOut(self.timeout.as_secs()))?
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let truncated: String = stderr.chars().take(MAX_STDERR_CHARS).collect();
            return Err(DownloadError::Failed(redact_secrets(truncated.trim())));
        }

        let printed = String::from_utf8_lossy(&output.stdout)
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(PathBuf::from);

        match printed {
            Some(path) if is_inside(&path, output_dir).await => Ok(path),
            _ => find_downloaded_file(output_dir).await,
        }
    }
}

#[async_trait]
impl AudioDownloader for YtDlpDownloader {
    #[tracing::instrument(skip(self), fields(cookies = self.cookies.is_some()))]
    async fn download(&self, url: &str) -> Result<AudioClip, DownloadError> {
        validate_url(url)?;

        let output_dir = TempDir::new()?;
        let cookies = self.write_cookies()?;

        let path = self
            .fetch(url, output_dir.path(), cookies.as_ref().map(|f| f.path()))
            .await?;

        let data = tokio::fs::read(&path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(OUTPUT_TEMPLATE)
            .to_string();

        tracing::info!(file_name = %file_name, bytes = data.len(), "Audio download completed");

        Ok(AudioClip::new(data, file_name))
    }
}

/// Accepts only http(s) URLs so nothing else is handed to the downloader.
pub fn validate_url(url: &str) -> Result<(), DownloadError> {
    let trimmed = url.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(())
    } else {
        Err(DownloadError::InvalidUrl(format!(
            "must start with http:// or https://: {}",
            trimmed
        )))
    }
}

async fn is_inside(path: &Path, dir: &Path) -> bool {
    let (Ok(path), Ok(dir)) = (
        tokio::fs::canonicalize(path).await,
        tokio::fs::canonicalize(dir).await,
    ) else {
        return false;
    };

    path.starts_with(dir)
        && tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
}

async fn find_downloaded_file(dir: &Path) -> Result<PathBuf, DownloadError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            return Ok(entry.path());
        }
    }
    Err(DownloadError::Failed("no audio file produced".to_string()))
}
