const MAX_VISIBLE_LENGTH: usize = 300;

const SECRET_MARKERS: [(&str, &str); 6] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("api-key: ", "api-key: [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Masks credentials in text that is about to be logged or returned as a diagnostic.
pub fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for (marker, replacement) in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let start = search_from + found;
            let value_start = start + marker.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            result.replace_range(start..end, replacement);
            search_from = start + replacement.len();
        }
    }

    result
}

/// Shortens long text for log lines, keeping a char count.
pub fn truncate_for_log(text: &str) -> String {
    let trimmed = text.trim();
    let total = trimmed.chars().count();

    if total <= MAX_VISIBLE_LENGTH {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
    format!("{}... ({} chars total)", visible, total)
}
