use super::categories::{category_template, mentions_any_keyword, select_category};
use super::correlation::{fired_rules, render_block};
use super::templates;

/// Below this many characters, text without any symptom keyword is too thin
/// to build a diagnosis on.
const MIN_UNKEYWORDED_LENGTH: usize = 15;

/// Build a diagnosis from fixed templates without any network access.
///
/// Total and deterministic: the same `(text, context)` always yields the same
/// non-empty string.
pub fn synthesize(text: &str, context: &[String]) -> String {
    let lower = text.to_lowercase();

    if !mentions_any_keyword(&lower) && text.chars().count() < MIN_UNKEYWORDED_LENGTH {
        return templates::INSUFFICIENT_INFORMATION.to_string();
    }

    let category = select_category(&lower);
    tracing::debug!(category = %category, "Local diagnosis category selected");

    let mut diagnosis = match category_template(category) {
        Some(template) => template.to_string(),
        None => templates::unspecified(text),
    };

    for rule in fired_rules(&lower, context) {
        tracing::debug!(rule = rule.name, "Context correlation applied");
        diagnosis.push_str("\n\n");
        diagnosis.push_str(&render_block(rule));
    }

    diagnosis
}
