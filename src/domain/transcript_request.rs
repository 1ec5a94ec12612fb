use super::platform::Platform;

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRequest {
    pub platform: Platform,
    pub url: String,
    pub metadata_blob: Option<String>,
}

impl TranscriptRequest {
    pub fn new(platform: &str, url: impl Into<String>, metadata_blob: Option<String>) -> Self {
        Self {
            platform: Platform::parse(platform),
            url: url.into(),
            metadata_blob,
        }
    }
}
