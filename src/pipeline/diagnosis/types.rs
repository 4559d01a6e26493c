use serde::{Deserialize, Serialize};

pub use crate::models::enums::{Category, SourceMode};

/// Diagnosis text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub body_text: String,
    pub source_mode: SourceMode,
}

impl DiagnosisResult {
    pub fn remote(body_text: String) -> Self {
        Self {
            body_text,
            source_mode: SourceMode::Remote,
        }
    }

    pub fn local(body_text: String) -> Self {
        Self {
            body_text,
            source_mode: SourceMode::Local,
        }
    }
}

/// Substring predicate in disjunctive form: matches when every fragment of at
/// least one alternative occurs in the (already lower-cased) text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordPattern {
    alternatives: &'static [&'static [&'static str]],
}

impl KeywordPattern {
    pub const fn new(alternatives: &'static [&'static [&'static str]]) -> Self {
        Self { alternatives }
    }

    pub fn matches(&self, lower: &str) -> bool {
        self.alternatives
            .iter()
            .any(|all| all.iter().all(|fragment| lower.contains(fragment)))
    }

    /// Every fragment mentioned anywhere in the pattern.
    pub fn fragments(&self) -> impl Iterator<Item = &'static str> {
        self.alternatives.iter().flat_map(|all| all.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOSE: KeywordPattern = KeywordPattern::new(&[&["насморк"], &["заложен", "нос"]]);

    #[test]
    fn single_fragment_alternative_matches() {
        assert!(NOSE.matches("сильный насморк"));
    }

    #[test]
    fn conjunction_requires_all_fragments() {
        assert!(NOSE.matches("заложен нос"));
        assert!(!NOSE.matches("заложено ухо"));
    }

    #[test]
    fn fragments_flattened_in_order() {
        let all: Vec<_> = NOSE.fragments().collect();
        assert_eq!(all, vec!["насморк", "заложен", "нос"]);
    }

    #[test]
    fn result_constructors_set_source() {
        assert_eq!(DiagnosisResult::remote("a".into()).source_mode, SourceMode::Remote);
        assert_eq!(DiagnosisResult::local("b".into()).source_mode, SourceMode::Local);
    }
}
