use std::time::Duration;

use super::gateway::TextGeneration;
use super::prompt::{build_classification_prompt, interpret_classification_answer};

/// Words that mark a message as a symptom description.
const SYMPTOM_KEYWORDS: &[&str] = &[
    "болит",
    "боль",
    "температура",
    "кашель",
    "насморк",
    "тошнота",
    "голова",
    "горло",
    "живот",
    "спина",
    "слабость",
    "утомляемость",
    "сыпь",
    "зуд",
    "давление",
    "одышка",
    "тяжело дышать",
    "озноб",
    "рвота",
    "понос",
    "диарея",
    "сухость",
    "першит",
    "головокружение",
    "бессонница",
    "аллергия",
    "заложенность",
    "мигрень",
    "простуда",
    "потливость",
    "судороги",
    "тремор",
    "чешется",
    "опухоль",
    "отек",
];

/// Texts longer than this many characters count as symptom descriptions
/// regardless of content.
const PERMISSIVE_LENGTH: usize = 10;

/// Keyword classifier. Biased towards accepting: any text longer than ten
/// characters passes even without a keyword.
pub fn is_symptom_local(text: &str) -> bool {
    let lower = text.to_lowercase();
    SYMPTOM_KEYWORDS.iter().any(|k| lower.contains(k))
        || text.chars().count() > PERMISSIVE_LENGTH
}

/// Ask the inference endpoint whether `text` describes symptoms.
///
/// Never fails: any upstream error counts as a symptom.
pub fn is_symptom_remote<G: TextGeneration + ?Sized>(
    generator: &G,
    text: &str,
    timeout: Duration,
) -> bool {
    let prompt = build_classification_prompt(text);

    match generator.generate(&prompt, timeout) {
        Ok(answer) => {
            let accepted = interpret_classification_answer(&answer);
            tracing::debug!(accepted, answer = %answer, "Remote symptom classification");
            accepted
        }
        Err(e) => {
            tracing::warn!(error = %e, "Symptom classification failed, accepting input");
            true
        }
    }
}
