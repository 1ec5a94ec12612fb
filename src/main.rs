use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use vidscript::application::services::{AudioPipeline, TranscriptService};
use vidscript::infrastructure::audio::{TranscriptionEngineFactory, YtDlpDownloader};
use vidscript::infrastructure::observability::{TracingConfig, init_tracing};
use vidscript::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    if settings.auth.api_key.trim().is_empty() {
        tracing::warn!("TRANSCRIPT_API_KEY is not set, every request will be rejected");
    }

    let transcript_service = match TranscriptionEngineFactory::create(&settings.transcription)? {
        Some(engine) => {
            let downloader = YtDlpDownloader::new(
                settings.downloader.binary.clone(),
                settings.downloader.cookies.clone(),
                Duration::from_secs(settings.downloader.timeout_secs),
            );
            match downloader.verify().await {
                Ok(version) => tracing::info!(
                    binary = %settings.downloader.binary,
                    version = %version,
                    cookies = downloader.has_cookies(),
                    "Audio downloader configured"
                ),
                Err(e) => tracing::warn!(
                    binary = %settings.downloader.binary,
                    error = %e,
                    "Audio downloader unavailable, audio requests will fall back"
                ),
            }
            let pipeline = AudioPipeline::new(
                Arc::new(downloader),
                engine,
                settings.transcription.max_audio_bytes(),
            );
            TranscriptService::new(Arc::new(pipeline))
        }
        None => TranscriptService::without_audio(),
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState::new(transcript_service, settings));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
