/// Instruction appended to every diagnosis prompt.
pub const DIAGNOSIS_INSTRUCTION: &str = "Дайте подробный анализ симптомов, предварительный диагноз с возможными причинами, и четкие рекомендации: к какому специалисту обратиться и какие анализы стоит сдать для подтверждения диагноза.";

/// Answer fragments read as "yes, this is a symptom description".
const AFFIRMATIVE_TOKENS: &[&str] = &["да", "это симптом", "это описание симптом"];

/// Answer fragment read as "no".
const NEGATIVE_TOKEN: &str = "нет";

/// Build the yes/no prompt for remote symptom classification.
pub fn build_classification_prompt(text: &str) -> String {
    format!("Это описание медицинских симптомов? \"{text}\"")
}

/// Build the diagnosis prompt, prefixed with prior symptoms when there are any.
pub fn build_diagnosis_prompt(text: &str, context: &[String]) -> String {
    let mut prompt = String::new();

    if !context.is_empty() {
        let quoted: Vec<String> = context.iter().map(|s| format!("\"{s}\"")).collect();
        prompt.push_str("Предыдущие симптомы пациента: ");
        prompt.push_str(&quoted.join(", "));
        prompt.push_str(". ");
    }

    prompt.push_str(&format!("Текущие симптомы: {text}. {DIAGNOSIS_INSTRUCTION}"));
    prompt
}

/// Interpret a free-text classification answer.
///
/// Affirmative when it contains a "yes" token, or when it lacks a "no" token.
pub fn interpret_classification_answer(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    AFFIRMATIVE_TOKENS.iter().any(|t| lower.contains(t)) || !lower.contains(NEGATIVE_TOKEN)
}
