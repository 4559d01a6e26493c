//! Engine configuration.
//!
//! Everything that used to be read ad hoc from the process environment is
//! resolved once into an [`EngineConfig`]; the orchestrator only ever sees the
//! derived [`EngineSettings`].

use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "MedAssyst";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hosted text-generation endpoint used when none is configured.
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/Mykesmedicus";

/// Budget for the yes/no symptom classification call.
pub const DEFAULT_CLASSIFY_TIMEOUT_SECS: u64 = 5;

/// Budget for the diagnosis generation call.
pub const DEFAULT_DIAGNOSIS_TIMEOUT_SECS: u64 = 10;

/// How many recent active chats feed the context history.
pub const CONTEXT_CHAT_LIMIT: usize = 3;

// Environment keys
pub const ENV_API_TOKEN: &str = "HUGGINGFACE_API_TOKEN";
pub const ENV_INFERENCE_URL: &str = "INFERENCE_API_URL";
pub const ENV_USE_MOCK_AI: &str = "USE_MOCK_AI";
pub const ENV_CLASSIFY_TIMEOUT: &str = "INFERENCE_CLASSIFY_TIMEOUT_SECS";
pub const ENV_DIAGNOSIS_TIMEOUT: &str = "INFERENCE_DIAGNOSIS_TIMEOUT_SECS";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "medassyst_lib=info"
}

/// Whether classification and diagnosis go to the remote endpoint or stay local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceMode {
    /// Ask the external inference service, fall back locally on failure.
    Remote,
    /// Keyword classifier and rule-based synthesizer only.
    Local,
}

/// Values the orchestrator needs for one invocation.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub mode: InferenceMode,
    pub classify_timeout: Duration,
    pub diagnosis_timeout: Duration,
    pub context_chat_limit: usize,
}

impl EngineSettings {
    pub fn local() -> Self {
        Self {
            mode: InferenceMode::Local,
            ..Self::remote()
        }
    }

    pub fn remote() -> Self {
        Self {
            mode: InferenceMode::Remote,
            classify_timeout: Duration::from_secs(DEFAULT_CLASSIFY_TIMEOUT_SECS),
            diagnosis_timeout: Duration::from_secs(DEFAULT_DIAGNOSIS_TIMEOUT_SECS),
            context_chat_limit: CONTEXT_CHAT_LIMIT,
        }
    }
}

/// Full engine configuration, including the endpoint credentials.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub inference_url: String,
    pub api_token: Option<String>,
    pub settings: EngineSettings,
}

impl EngineConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(ENV_API_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let inference_url = lookup(ENV_INFERENCE_URL)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());

        let use_mock = lookup(ENV_USE_MOCK_AI)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mode = if use_mock {
            InferenceMode::Local
        } else if api_token.is_none() {
            tracing::warn!("{ENV_API_TOKEN} is not set, using local inference only");
            InferenceMode::Local
        } else {
            InferenceMode::Remote
        };

        let classify_timeout = parse_secs(
            lookup(ENV_CLASSIFY_TIMEOUT),
            DEFAULT_CLASSIFY_TIMEOUT_SECS,
        );
        let diagnosis_timeout = parse_secs(
            lookup(ENV_DIAGNOSIS_TIMEOUT),
            DEFAULT_DIAGNOSIS_TIMEOUT_SECS,
        );

        Self {
            inference_url,
            api_token,
            settings: EngineSettings {
                mode,
                classify_timeout,
                diagnosis_timeout,
                context_chat_limit: CONTEXT_CHAT_LIMIT,
            },
        }
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> Duration {
    let secs = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(default);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_name_is_medassyst() {
        assert_eq!(APP_NAME, "MedAssyst");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn token_present_selects_remote_mode() {
        let config = EngineConfig::from_lookup(lookup_from(&[(ENV_API_TOKEN, "hf_abc")]));
        assert_eq!(config.settings.mode, InferenceMode::Remote);
        assert_eq!(config.api_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.inference_url, DEFAULT_INFERENCE_URL);
    }

    #[test]
    fn missing_token_selects_local_mode() {
        let config = EngineConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.settings.mode, InferenceMode::Local);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = EngineConfig::from_lookup(lookup_from(&[(ENV_API_TOKEN, "   ")]));
        assert_eq!(config.settings.mode, InferenceMode::Local);
    }

    #[test]
    fn mock_flag_forces_local_mode() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_API_TOKEN, "hf_abc"),
            (ENV_USE_MOCK_AI, "TRUE"),
        ]));
        assert_eq!(config.settings.mode, InferenceMode::Local);
    }

    #[test]
    fn default_budgets_are_five_and_ten_seconds() {
        let config = EngineConfig::from_lookup(lookup_from(&[(ENV_API_TOKEN, "t")]));
        assert_eq!(config.settings.classify_timeout, Duration::from_secs(5));
        assert_eq!(config.settings.diagnosis_timeout, Duration::from_secs(10));
        assert_eq!(config.settings.context_chat_limit, 3);
    }

    #[test]
    fn timeouts_and_url_overridable() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_API_TOKEN, "t"),
            (ENV_INFERENCE_URL, "http://127.0.0.1:9000/generate"),
            (ENV_CLASSIFY_TIMEOUT, "2"),
            (ENV_DIAGNOSIS_TIMEOUT, "30"),
        ]));
        assert_eq!(config.inference_url, "http://127.0.0.1:9000/generate");
        assert_eq!(config.settings.classify_timeout, Duration::from_secs(2));
        assert_eq!(config.settings.diagnosis_timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_CLASSIFY_TIMEOUT, "soon"),
            (ENV_DIAGNOSIS_TIMEOUT, "0"),
        ]));
        assert_eq!(config.settings.classify_timeout, Duration::from_secs(5));
        assert_eq!(config.settings.diagnosis_timeout, Duration::from_secs(10));
    }

    #[test]
    fn dotenv_file_values_are_readable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{ENV_INFERENCE_URL}=http://localhost:8080/models/test").unwrap();
        writeln!(file, "{ENV_USE_MOCK_AI}=true").unwrap();

        let pairs: HashMap<String, String> = dotenvy::from_path_iter(file.path())
            .unwrap()
            .map(|item| item.unwrap())
            .collect();

        let config = EngineConfig::from_lookup(|key| pairs.get(key).cloned());
        assert_eq!(config.inference_url, "http://localhost:8080/models/test");
        assert_eq!(config.settings.mode, InferenceMode::Local);
    }

    #[test]
    fn settings_presets_differ_only_in_mode() {
        let local = EngineSettings::local();
        let remote = EngineSettings::remote();
        assert_eq!(local.mode, InferenceMode::Local);
        assert_eq!(remote.mode, InferenceMode::Remote);
        assert_eq!(local.diagnosis_timeout, remote.diagnosis_timeout);
    }
}
