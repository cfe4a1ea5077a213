//! Thread splitting

/// Separator between posts of a thread: exactly four newlines
pub const THREAD_DELIMITER: &str = "\n\n\n\n";

/// Split `text` into post bodies.
///
/// When `enabled` is false the whole (trimmed) text is a single post. When
/// enabled, the text is cut on [`THREAD_DELIMITER`], blank segments are
/// dropped and the rest are trimmed. A text made only of delimiters yields no
/// posts at all.
pub fn split(text: &str, enabled: bool) -> Vec<String> {
    if !enabled {
        return vec![text.trim().to_string()];
    }

    text.split(THREAD_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}
