use std::fmt;

/// Video platform named by a transcript request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    Other(String),
}

impl Platform {
    pub fn parse(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("youtube") {
            Self::YouTube
        } else {
            Self::Other(tag.to_string())
        }
    }

    /// Whether audio for this platform can be downloaded and transcribed.
    pub fn supports_audio(&self) -> bool {
        matches!(self, Self::YouTube)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::YouTube => "youtube",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
