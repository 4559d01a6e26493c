//! Chat-facing text helpers: title generation and fixed user messages.

/// Maximum title length in characters, before the "..." suffix.
pub const TITLE_MAX_CHARS: usize = 50;

/// System greeting placed in every new chat.
pub const GREETING_MESSAGE: &str =
    "Здравствуйте! Опишите ваши симптомы, и я постараюсь помочь с предварительным диагнозом.";

/// Guidance returned when a message is not recognised as a symptom description.
pub const REJECTION_MESSAGE: &str = "Пожалуйста, опишите только ваши медицинские симптомы. Например: \"У меня болит голова и тошнит\".";

// ═══════════════════════════════════════════
// Title generation
// ═══════════════════════════════════════════

/// Generate a chat title from the first symptom message.
///
/// Short texts are kept whole. Longer ones are cut to 50 characters, then back
/// to the last whitespace inside that slice, and suffixed with "...". The first
/// character is upper-cased in both cases. Character counts are Unicode-aware.
pub fn format_title(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.chars().count() <= TITLE_MAX_CHARS {
        return capitalize_first(trimmed);
    }

    let boundary = trimmed
        .char_indices()
        .nth(TITLE_MAX_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    let mut title = &trimmed[..boundary];

    if let Some(pos) = title.rfind(char::is_whitespace) {
        if pos > 0 {
            title = &title[..pos];
        }
    }

    format!("{}...", capitalize_first(title))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Message shown alongside an invalid-input rejection.
pub fn rejection_message() -> &'static str {
    REJECTION_MESSAGE
}
