use super::templates;
use super::types::{Category, KeywordPattern};

/// One row of the category table: a predicate over lower-cased text and the
/// template emitted when it is the first to match.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub pattern: KeywordPattern,
    pub template: &'static str,
}

/// Categories in priority order. The first matching row wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Headache,
        pattern: KeywordPattern::new(&[&["голов", "бол"]]),
        template: templates::HEADACHE,
    },
    CategoryRule {
        category: Category::SoreThroat,
        pattern: KeywordPattern::new(&[&["горл", "бол"], &["горл", "першит"]]),
        template: templates::SORE_THROAT,
    },
    CategoryRule {
        category: Category::Fever,
        pattern: KeywordPattern::new(&[&["температур"], &["жар"], &["лихорадк"]]),
        template: templates::FEVER,
    },
    CategoryRule {
        category: Category::Cough,
        pattern: KeywordPattern::new(&[&["кашл"]]),
        template: templates::COUGH,
    },
    CategoryRule {
        category: Category::Rhinitis,
        pattern: KeywordPattern::new(&[&["насморк"], &["заложен", "нос"]]),
        template: templates::RHINITIS,
    },
    CategoryRule {
        category: Category::AbdominalPain,
        pattern: KeywordPattern::new(&[&["живот", "бол"]]),
        template: templates::ABDOMINAL_PAIN,
    },
    CategoryRule {
        category: Category::NauseaVomiting,
        pattern: KeywordPattern::new(&[&["тошнот"], &["рвот"]]),
        template: templates::NAUSEA_VOMITING,
    },
    CategoryRule {
        category: Category::Diarrhea,
        pattern: KeywordPattern::new(&[&["диаре"], &["понос"]]),
        template: templates::DIARRHEA,
    },
    CategoryRule {
        category: Category::Skin,
        pattern: KeywordPattern::new(&[&["сыпь"], &["зуд"]]),
        template: templates::SKIN,
    },
    CategoryRule {
        category: Category::Dyspnea,
        pattern: KeywordPattern::new(&[&["одышк"], &["трудно дыша"], &["не хватает воздух"]]),
        template: templates::DYSPNEA,
    },
    CategoryRule {
        category: Category::Hypertension,
        pattern: KeywordPattern::new(&[&["давлен"], &["гиперт"]]),
        template: templates::HYPERTENSION,
    },
    CategoryRule {
        category: Category::Allergy,
        pattern: KeywordPattern::new(&[&["аллерг"]]),
        template: templates::ALLERGY,
    },
];

/// General complaint words that count as "mentions a symptom" for the
/// insufficient-information check, alongside every category fragment.
pub const GENERAL_SYMPTOM_KEYWORDS: &[&str] = &[
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
];

/// First category whose predicate matches, or `Unspecified`.
pub fn select_category(lower: &str) -> Category {
    matching_rule(lower)
        .map(|rule| rule.category)
        .unwrap_or(Category::Unspecified)
}

pub fn matching_rule(lower: &str) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.pattern.matches(lower))
}

/// Fixed template of a category. `Unspecified` has none; its text echoes the input.
pub fn category_template(category: Category) -> Option<&'static str> {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.template)
}

/// True when the lower-cased text contains any known symptom keyword.
pub fn mentions_any_keyword(lower: &str) -> bool {
    CATEGORY_RULES
        .iter()
        .flat_map(|rule| rule.pattern.fragments())
        .chain(GENERAL_SYMPTOM_KEYWORDS.iter().copied())
        .any(|keyword| lower.contains(keyword))
}
