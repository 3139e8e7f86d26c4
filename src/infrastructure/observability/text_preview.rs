const MAX_PREVIEW_CHARS: usize = 120;

/// Renders document text as a short single-line snippet suitable for log
/// output. Legal documents can run to many pages; logs get the head only.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[empty]");
    }

    let flattened: String = trimmed
        .chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .collect();

    let total = flattened.chars().count();
    if total <= MAX_PREVIEW_CHARS {
        return flattened;
    }

    let head: String = flattened.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{head}... ({total} chars total)")
}
