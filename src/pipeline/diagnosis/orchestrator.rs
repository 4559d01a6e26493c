use uuid::Uuid;

use super::classify::{is_symptom_local, is_symptom_remote};
use super::context::{recent_symptoms, ChatStore};
use super::gateway::TextGeneration;
use super::prompt::build_diagnosis_prompt;
use super::synthesize::synthesize;
use super::types::DiagnosisResult;
use super::DiagnosisError;
use crate::chat;
use crate::config::{EngineSettings, InferenceMode};

/// Diagnosis engine entry point.
///
/// Coordinates: classify → fetch context → remote inference → local fallback.
/// Holds no mutable state; one engine can serve concurrent callers.
pub struct DiagnosisEngine<'a, G: TextGeneration, S: ChatStore> {
    generator: &'a G,
    store: &'a S,
    settings: EngineSettings,
}

impl<'a, G: TextGeneration, S: ChatStore> DiagnosisEngine<'a, G, S> {
    pub fn new(generator: &'a G, store: &'a S, settings: EngineSettings) -> Self {
        Self {
            generator,
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Whether `text` describes medical symptoms. Never fails.
    pub fn classify(&self, text: &str) -> bool {
        match self.settings.mode {
            InferenceMode::Local => is_symptom_local(text),
            InferenceMode::Remote => {
                is_symptom_remote(self.generator, text, self.settings.classify_timeout)
            }
        }
    }

    /// Produce a diagnosis for `text`, enriched with the user's recent history.
    ///
    /// Only a failed classification is surfaced. Inference failures fall back
    /// to the local synthesizer.
    pub fn generate_diagnosis(
        &self,
        text: &str,
        user_id: Uuid,
    ) -> Result<DiagnosisResult, DiagnosisError> {
        // Step 1: Classify
        if !self.classify(text) {
            tracing::info!(%user_id, "Message rejected as non-symptom input");
            return Err(DiagnosisError::InvalidInput);
        }

        // Step 2: Symptom history
        let context = recent_symptoms(self.store, user_id, self.settings.context_chat_limit);

        // Step 3: Local mode never touches the endpoint
        if self.settings.mode == InferenceMode::Local {
            tracing::debug!(%user_id, "Local mode, synthesizing diagnosis");
            return Ok(DiagnosisResult::local(synthesize(text, &context)));
        }

        // Step 4: Remote inference, local fallback
        let prompt = build_diagnosis_prompt(text, &context);
        match self.generator.generate(&prompt, self.settings.diagnosis_timeout) {
            Ok(body) => {
                tracing::info!(%user_id, context_items = context.len(), "Remote diagnosis generated");
                Ok(DiagnosisResult::remote(body))
            }
            Err(e) => {
                tracing::warn!(
                    %user_id,
                    error = %e,
                    timed_out = e.is_timeout(),
                    "Remote diagnosis failed, falling back to local synthesis"
                );
                Ok(DiagnosisResult::local(synthesize(text, &context)))
            }
        }
    }

    pub fn format_title(&self, text: &str) -> String {
        chat::format_title(text)
    }
}
