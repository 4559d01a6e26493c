use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

use super::InferenceError;
use crate::config::EngineConfig;

/// Single-shot text generation against an external model.
///
/// One attempt per call, bounded by `timeout`. Retrying is the caller's decision.
pub trait TextGeneration {
    fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, InferenceError>;
}

/// Client for a hosted text-generation endpoint speaking the
/// `{"inputs": ...}` → `[{"generated_text": ...}]` protocol.
pub struct HuggingFaceClient {
    endpoint: String,
    api_token: Option<String>,
    client: reqwest::blocking::Client,
}

impl HuggingFaceClient {
    pub fn new(endpoint: &str, api_token: Option<String>) -> Result<Self, InferenceError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| InferenceError::HttpClient(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            api_token,
            client,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, InferenceError> {
        Self::new(&config.inference_url, config.api_token.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error, timeout: Duration) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(timeout)
        } else if e.is_connect() {
            InferenceError::Connection(self.endpoint.clone())
        } else {
            InferenceError::HttpClient(e.to_string())
        }
    }
}

/// Request body for the text-generation endpoint
#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
}

impl TextGeneration for HuggingFaceClient {
    fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, InferenceError> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(InferenceError::MissingToken)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            timeout_ms = timeout.as_millis() as u64,
            prompt = %prompt,
            "Sending inference request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&GenerateRequest { inputs: prompt })
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .map_err(|e| self.transport_error(e, timeout))?;
        tracing::debug!(body = %body, "Inference response received");

        parse_generated_text(&body)
    }
}

/// Extract `generated_text` from the first element of the response array.
///
/// Elements after the first are not inspected.
pub fn parse_generated_text(body: &str) -> Result<String, InferenceError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

    let first = items
        .first()
        .ok_or_else(|| InferenceError::MalformedResponse("empty response array".into()))?;

    match first.get("generated_text").and_then(|v| v.as_str()) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(InferenceError::MalformedResponse(
            "missing generated_text".into(),
        )),
    }
}

/// Scripted generator for tests and offline embedding.
///
/// Replies are consumed in order; the last one repeats once the script runs out.
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String, InferenceError>>>,
    calls: Mutex<Vec<(String, Duration)>>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self::scripted(vec![Ok(response.to_string())])
    }

    pub fn failing(error: InferenceError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub fn scripted(replies: Vec<Result<String, InferenceError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Timeout budgets received so far, in call order.
    pub fn timeouts(&self) -> Vec<Duration> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, t)| *t)
            .collect()
    }
}

impl TextGeneration for MockGenerator {
    fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, InferenceError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((prompt.to_string(), timeout));

        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };

        reply.unwrap_or_else(|| Err(InferenceError::MalformedResponse("no scripted reply".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::diagnosis::test_support::{spawn_stub, unreachable_url};

    const BUDGET: Duration = Duration::from_secs(5);

    fn client_for(url: &str) -> HuggingFaceClient {
        HuggingFaceClient::new(url, Some("hf_test_token".into())).unwrap()
    }

    #[test]
    fn returns_generated_text_of_first_element() {
        let server = spawn_stub(
            200,
            r#"[{"generated_text": "Похоже на мигрень"}, {"generated_text": "ignored"}]"#,
            Duration::ZERO,
        );
        let text = client_for(&server.url).generate("prompt", BUDGET).unwrap();
        assert_eq!(text, "Похоже на мигрень");
    }

    #[test]
    fn sends_bearer_token_and_inputs_body() {
        let server = spawn_stub(200, r#"[{"generated_text": "ok"}]"#, Duration::ZERO);
        client_for(&server.url)
            .generate("Текущие симптомы: кашель", BUDGET)
            .unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.request_line.starts_with("POST /models/test"));
        assert_eq!(request.header("authorization"), Some("Bearer hf_test_token"));
        assert!(request
            .header("content-type")
            .unwrap()
            .starts_with("application/json"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["inputs"], "Текущие симптомы: кашель");
    }

    #[test]
    fn non_success_status_is_upstream_failure() {
        let server = spawn_stub(503, r#"{"error": "Model is loading"}"#, Duration::ZERO);
        let err = client_for(&server.url).generate("prompt", BUDGET).unwrap_err();
        match err {
            InferenceError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("loading"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn slow_upstream_times_out() {
        let server = spawn_stub(200, r#"[{"generated_text": "late"}]"#, Duration::from_secs(2));
        let err = client_for(&server.url)
            .generate("prompt", Duration::from_millis(200))
            .unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err}");
    }

    #[test]
    fn unreachable_endpoint_is_upstream_failure() {
        let err = client_for(&unreachable_url())
            .generate("prompt", BUDGET)
            .unwrap_err();
        assert!(matches!(
            err,
            InferenceError::Connection(_) | InferenceError::HttpClient(_)
        ));
    }

    #[test]
    fn missing_token_fails_without_request() {
        let server = spawn_stub(200, r#"[{"generated_text": "ok"}]"#, Duration::ZERO);
        let client = HuggingFaceClient::new(&server.url, None).unwrap();
        let err = client.generate("prompt", BUDGET).unwrap_err();
        assert!(matches!(err, InferenceError::MissingToken));
        assert!(server.requests().is_empty());
    }

    #[test]
    fn parse_rejects_empty_array() {
        let err = parse_generated_text("[]").unwrap_err();
        assert!(matches!(err, InferenceError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_missing_or_empty_field() {
        assert!(parse_generated_text(r#"[{"score": 0.9}]"#).is_err());
        assert!(parse_generated_text(r#"[{"generated_text": ""}]"#).is_err());
    }

    #[test]
    fn parse_ignores_elements_after_first() {
        assert_eq!(
            parse_generated_text(r#"[{"generated_text": "ok"}, 5]"#).unwrap(),
            "ok"
        );
        assert_eq!(
            parse_generated_text(r#"[{"generated_text": "ok"}, {"generated_text": 7}]"#).unwrap(),
            "ok"
        );
    }

    #[test]
    fn parse_rejects_non_string_first_element() {
        assert!(parse_generated_text(r#"[{"generated_text": 7}, {"generated_text": "ok"}]"#).is_err());
        assert!(parse_generated_text(r#"[5]"#).is_err());
    }

    #[test]
    fn parse_rejects_object_shape() {
        assert!(parse_generated_text(r#"{"generated_text": "not an array"}"#).is_err());
    }

    #[test]
    fn client_trims_endpoint() {
        let client = HuggingFaceClient::new("  http://localhost:8080/models/x ", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/models/x");
    }

    #[test]
    fn mock_replays_script_then_repeats_last() {
        let mock = MockGenerator::scripted(vec![
            Ok("да".into()),
            Err(InferenceError::Timeout(Duration::from_secs(10))),
        ]);
        assert_eq!(mock.generate("a", BUDGET).unwrap(), "да");
        assert!(mock.generate("b", BUDGET).unwrap_err().is_timeout());
        assert!(mock.generate("c", BUDGET).unwrap_err().is_timeout());
        assert_eq!(mock.prompts(), vec!["a", "b", "c"]);
        assert_eq!(mock.timeouts(), vec![BUDGET; 3]);
    }
}
