/// Appended when the extracted text is cut to fit the character budget.
pub const TRUNCATION_MARKER: &str = "...";

/// Collapses runs of spaces/tabs to one space and runs of line breaks
/// (including whitespace-only lines) to a single newline, then trims.
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if !collapsed.is_empty() {
            lines.push(collapsed);
        }
    }
    lines.join("\n")
}

/// Cuts `text` to at most `max_chars` characters. When a cut happens the
/// result ends in `TRUNCATION_MARKER`, which counts against the budget.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let marker_len = TRUNCATION_MARKER.chars().count();
    if max_chars <= marker_len {
        return TRUNCATION_MARKER.chars().take(max_chars).collect();
    }

    let mut out: String = text.chars().take(max_chars - marker_len).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}
