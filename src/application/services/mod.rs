mod audio_pipeline;
mod transcript_service;

pub use audio_pipeline::AudioPipeline;
pub use transcript_service::TranscriptService;
