use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Builds the configured engine, or `None` when no credentials are set.
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Option<Arc<dyn TranscriptionEngine>>, TranscriptionError> {
        let Some(api_key) = settings.credentials() else {
            tracing::warn!(
                provider = ?settings.provider,
                "No speech-to-text credentials configured, audio transcription disabled"
            );
            return Ok(None);
        };

        let engine: Arc<dyn TranscriptionEngine> = match settings.provider {
            TranscriptionProviderSetting::OpenAi => Arc::new(OpenAiWhisperEngine::new(
                api_key.to_string(),
                settings.base_url.clone(),
                Some(settings.model.clone()),
            )),
            TranscriptionProviderSetting::Azure => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::NotConfigured(
                        "base_url required for Azure Whisper".to_string(),
                    )
                })?;
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::NotConfigured(
                        "azure_deployment required for Azure Whisper".to_string(),
                    )
                })?;
                Arc::new(AzureWhisperEngine::new(
                    base_url,
                    deployment,
                    api_key,
                    &settings.azure_api_version,
                ))
            }
        };

        tracing::info!(
            provider = ?settings.provider,
            model = %settings.model,
            "Transcription engine ready"
        );

        Ok(Some(engine))
    }
}
