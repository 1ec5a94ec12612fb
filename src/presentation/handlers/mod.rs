mod health;
mod transcript;

pub use health::{HealthResponse, health_handler};
pub use transcript::{TranscriptRequestBody, TranscriptResponse, transcript_handler};
