use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use super::environment::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub transcription: TranscriptionSettings,
    pub downloader: DownloaderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Bearer token clients must present. Empty means the server is misconfigured.
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub max_audio_size_mb: usize,
}

impl TranscriptionSettings {
    /// The configured key, if it is non-blank.
    pub fn credentials(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn max_audio_bytes(&self) -> usize {
        self.max_audio_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

impl TranscriptionProviderSetting {
    /// Unprefixed environment variable holding this provider's key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            TranscriptionProviderSetting::OpenAi => "OPENAI_API_KEY",
            TranscriptionProviderSetting::Azure => "AZURE_OPENAI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloaderSettings {
    pub binary: String,
    /// Netscape-format cookie jar passed to the downloader.
    pub cookies: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads settings from defaults, `appsettings.{environment}` and the process environment.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str());

        let layered = Self::defaults()?
            .add_source(File::new(&file_name, FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            )
            .build()?;

        let provider: TranscriptionProviderSetting = layered.get("transcription.provider")?;

        Config::builder()
            .add_source(layered)
            .set_override_option("auth.api_key", env_trimmed("TRANSCRIPT_API_KEY"))?
            .set_override_option("transcription.api_key", env_trimmed(provider.api_key_var()))?
            .set_override_option("downloader.cookies", std::env::var("YOUTUBE_COOKIES").ok())?
            .set_override_option("server.port", env_trimmed("SERVER_PORT"))?
            .build()?
            .try_deserialize()
    }

    /// Builds settings from defaults plus explicit overrides, without touching
    /// files or the environment.
    pub fn from_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        for (key, value) in overrides {
            builder = builder.set_override(key, value)?;
        }
        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("auth.api_key", "")?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.azure_api_version", "2024-06-01")?
            .set_default("transcription.max_audio_size_mb", 25)?
            .set_default("downloader.binary", "yt-dlp")?
            .set_default("downloader.timeout_secs", 300)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
