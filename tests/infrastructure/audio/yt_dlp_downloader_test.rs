use std::time::Duration;

use vidscript::application::ports::{AudioDownloader, DownloadError};
use vidscript::infrastructure::audio::{YtDlpDownloader, validate_url};

const MISSING_BINARY: &str = "/nonexistent/bin/yt-dlp-for-tests";

#[test]
fn given_http_urls_when_validating_then_accepts_them() {
    assert!(validate_url("https://www.youtube.com/watch?v=abc").is_ok());
    assert!(validate_url("  http://youtu.be/abc  ").is_ok());
}

#[test]
fn given_non_http_urls_when_validating_then_rejects_them() {
    for url in ["", "ftp://host/file", "--exec rm", "file:///etc/passwd", "youtube.com/x"] {
        assert!(
            matches!(validate_url(url), Err(DownloadError::InvalidUrl(_))),
            "url: {}",
            url
        );
    }
}

#[tokio::test]
async fn given_invalid_url_when_downloading_then_fails_before_running_binary() {
    let downloader = YtDlpDownloader::new(MISSING_BINARY, None, Duration::from_secs(5));

    let result = downloader.download("--version").await;

    assert!(matches!(result, Err(DownloadError::InvalidUrl(_))));
}

#[tokio::test]
async fn given_missing_binary_when_downloading_then_returns_binary_not_found() {
    let downloader = YtDlpDownloader::new(MISSING_BINARY, None, Duration::from_secs(5));

    let result = downloader.download("https://www.youtube.com/watch?v=abc").await;

    match result {
        Err(DownloadError::BinaryNotFound(binary)) => assert_eq!(binary, MISSING_BINARY),
        other => panic!("expected missing binary, got {:?}", other.map(|c| c.file_name)),
    }
}

#[test]
fn given_blank_cookies_when_constructing_then_cookies_are_ignored() {
    let without = YtDlpDownloader::new("yt-dlp", Some("  \n".to_string()), Duration::from_secs(1));
    let with = YtDlpDownloader::new(
        "yt-dlp",
        Some("# Netscape HTTP Cookie File\n".to_string()),
        Duration::from_secs(1),
    );

    assert!(!without.has_cookies());
    assert!(with.has_cookies());
}

#[tokio::test]
async fn given_missing_binary_when_verifying_then_returns_binary_not_found() {
    let downloader = YtDlpDownloader::new(MISSING_BINARY, None, Duration::from_secs(5));

    let result = downloader.verify().await;

    match result {
        Err(DownloadError::BinaryNotFound(binary)) => assert_eq!(binary, MISSING_BINARY),
        other => panic!("expected missing binary, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn given_hanging_binary_when_verifying_then_times_out() {
    let script = tempfile::Builder::new().suffix(".sh").tempfile().unwrap();
    std::fs::write(script.path(), "#!/bin/sh\nsleep 30\n").unwrap();
    let path = script.into_temp_path();
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    let downloader = YtDlpDownloader::new(
        path.to_string_lossy().to_string(),
        None,
        Duration::from_millis(200),
    );

    let started = std::time::Instant::now();
    let result = downloader.verify().await;

    assert!(matches!(result, Err(DownloadError::TimedOut(_))), "got {:?}", result);
    assert!(started.elapsed() < Duration::from_secs(5));
}
