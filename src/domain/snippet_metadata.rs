use serde_json::{Map, Value};

/// Catalog metadata for a video, taken from the `snippet` object of a
/// serialized metadata blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl SnippetMetadata {
    /// Parses a metadata blob leniently. Any malformed input yields the empty record.
    pub fn from_blob(blob: Option<&str>) -> Self {
        let Some(blob) = blob.filter(|b| !b.is_empty()) else {
            return Self::default();
        };

        let root: Value = match serde_json::from_str(blob) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Metadata blob is not valid JSON");
                return Self::default();
            }
        };

        match root.get("snippet").and_then(Value::as_object) {
            Some(snippet) => Self::from_snippet(snippet),
            None => Self::default(),
        }
    }

    fn from_snippet(snippet: &Map<String, Value>) -> Self {
        let text_field = |key: &str| {
            snippet
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let tags = snippet
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: text_field("title"),
            description: text_field("description"),
            tags,
        }
    }

    /// Flattens title, description and tags into a single line of text.
    pub fn to_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            parts.push(title.to_string());
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            parts.push(description.to_string());
        }
        if !self.tags.is_empty() {
            parts.push(self.tags.join(" "));
        }

        parts.join(" ").replace('\n', " ").trim().to_string()
    }
}

/// Builds a pseudo-transcript from a serialized metadata blob.
pub fn extract_snippet_text(blob: Option<&str>) -> String {
    SnippetMetadata::from_blob(blob).to_text()
}
