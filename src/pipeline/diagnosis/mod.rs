pub mod types;
pub mod classify;
pub mod prompt;
pub mod gateway;
pub mod categories;
pub mod templates;
pub mod correlation;
pub mod synthesize;
pub mod context;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod test_support;

pub use types::*;
pub use classify::{is_symptom_local, is_symptom_remote};
pub use gateway::{HuggingFaceClient, MockGenerator, TextGeneration};
pub use synthesize::synthesize;
pub use context::{recent_symptoms, ChatStore, InMemoryChatStore};
pub use orchestrator::DiagnosisEngine;

use std::time::Duration;

use thiserror::Error;

/// Failure of the external inference endpoint. Always recovered locally.
#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    #[error("Inference API token is not configured")]
    MissingToken,

    #[error("Inference endpoint unreachable at {0}")]
    Connection(String),

    #[error("Inference request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Inference endpoint returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Failure of the chat store behind the context aggregator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Chat store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced to the caller of the diagnosis engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiagnosisError {
    #[error("Message is not a description of medical symptoms")]
    InvalidInput,
}
