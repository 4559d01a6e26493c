use super::templates;
use super::types::KeywordPattern;

/// Adds a block to the local diagnosis when the current text and the
/// patient's earlier symptoms together suggest a progression.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationRule {
    pub name: &'static str,
    /// Tested against the lower-cased current text.
    pub current: KeywordPattern,
    /// Tested against all prior symptoms joined by spaces, lower-cased.
    pub context: KeywordPattern,
    pub block: &'static str,
}

/// Evaluated in order; every rule that fires contributes its block.
pub const CORRELATION_RULES: &[CorrelationRule] = &[
    CorrelationRule {
        name: "dizziness_after_headache",
        current: KeywordPattern::new(&[&["головокружение"], &["слабость"]]),
        context: KeywordPattern::new(&[&["голов", "бол"]]),
        block: templates::DIZZINESS_AFTER_HEADACHE,
    },
    CorrelationRule {
        name: "fever_after_sore_throat",
        current: KeywordPattern::new(&[&["температур"]]),
        context: KeywordPattern::new(&[&["горл", "бол"]]),
        block: templates::FEVER_AFTER_SORE_THROAT,
    },
    CorrelationRule {
        name: "respiratory_progression",
        current: KeywordPattern::new(&[&["насморк"], &["кашель"]]),
        context: KeywordPattern::new(&[&["температур", "горл"]]),
        block: templates::RESPIRATORY_PROGRESSION,
    },
];

/// Collapse prior symptom texts into the single string rules are tested against.
pub fn context_haystack(context: &[String]) -> String {
    context.join(" ").to_lowercase()
}

/// Rules that fire for this pair of inputs, in table order.
pub fn fired_rules(lower_text: &str, context: &[String]) -> Vec<&'static CorrelationRule> {
    if context.is_empty() {
        return Vec::new();
    }

    let haystack = context_haystack(context);
    CORRELATION_RULES
        .iter()
        .filter(|rule| rule.current.matches(lower_text) && rule.context.matches(&haystack))
        .collect()
}

/// Format one augmentation block with its heading.
pub fn render_block(rule: &CorrelationRule) -> String {
    format!("{}\n{}", templates::AUGMENTATION_HEADING, rule.block)
}
