mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, DownloaderSettings, LoggingSettings, ServerSettings, Settings,
    TranscriptionProviderSetting, TranscriptionSettings,
};
