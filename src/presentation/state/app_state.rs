use std::sync::Arc;

use crate::application::services::TranscriptService;
use crate::presentation::config::Settings;

/// Immutable process-wide state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub transcript_service: Arc<TranscriptService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(transcript_service: TranscriptService, settings: Settings) -> Self {
        Self {
            transcript_service: Arc::new(transcript_service),
            settings: Arc::new(settings),
        }
    }

    pub fn api_key(&self) -> &str {
        self.settings.auth.api_key.trim()
    }
}
