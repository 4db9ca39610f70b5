//! Core `SectorClassifier` trait and `ApiClassifier` implementation.
//!
//! `ApiClassifier` calls either the Cohere chat API or any OpenAI-compatible
//! `/v1/chat/completions` endpoint.  All connection details come from
//! [`LlmConfig`]; the API key is resolved separately and passed in.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::SectorTable;
use crate::classify::ClassificationResult;
use crate::config::{LlmConfig, LlmProvider};
use crate::llm::prompt::PromptBuilder;
use crate::llm::response::{parse_verdict, SectorVerdict};

const DEFAULT_REASON: &str = "No reason provided by AI.";

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during AI classification.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("LLM endpoint returned HTTP {0}")]
    Status(u16),

    /// The response (envelope or embedded object) could not be parsed.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The LLM returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if let Some(status) = e.status() {
            LlmError::Status(status.as_u16())
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SectorClassifier trait
// ---------------------------------------------------------------------------

/// Async trait for AI-based sector classification.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn SectorClassifier>`).
#[async_trait]
pub trait SectorClassifier: Send + Sync {
    async fn classify(&self, org_name: &str) -> Result<ClassificationResult, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClassifier
// ---------------------------------------------------------------------------

/// Sends the classification prompt to the configured text-generation API and
/// resolves the answer against the sector table.
pub struct ApiClassifier {
    client: reqwest::Client,
    config: LlmConfig,
    api_key: String,
    prompt_builder: PromptBuilder,
    sectors: SectorTable,
}

impl ApiClassifier {
    /// Build an `ApiClassifier` from config, a resolved key and the sector
    /// table the answer must map into.
    ///
    /// A default (no-timeout) client is used as a last-resort fallback if the
    /// builder fails.
    pub fn from_config(config: &LlmConfig, api_key: String, sectors: SectorTable) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let prompt_builder = PromptBuilder::new(sectors.labels());

        Self {
            client,
            config: config.clone(),
            api_key,
            prompt_builder,
            sectors,
        }
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match self.config.provider {
            LlmProvider::Cohere => format!("{base}/v1/chat"),
            LlmProvider::OpenAiCompatible => format!("{base}/v1/chat/completions"),
        }
    }

    fn request_body(&self, org_name: &str) -> Value {
        match self.config.provider {
            LlmProvider::Cohere => serde_json::json!({
                "model":       self.config.model,
                "message":     self.prompt_builder.build(org_name),
                "temperature": self.config.temperature
            }),
            LlmProvider::OpenAiCompatible => {
                let (system_msg, user_msg) = self.prompt_builder.build_chat(org_name);
                serde_json::json!({
                    "model": self.config.model,
                    "messages": [
                        { "role": "system", "content": system_msg },
                        { "role": "user",   "content": user_msg   }
                    ],
                    "stream":      false,
                    "temperature": self.config.temperature,
                    "max_tokens":  256
                })
            }
        }
    }
}

#[async_trait]
impl SectorClassifier for ApiClassifier {
    async fn classify(&self, org_name: &str) -> Result<ClassificationResult, LlmError> {
        let mut req = self.client.post(self.endpoint()).json(&self.request_body(org_name));
        if !self.api_key.is_empty() {
            req = req.bearer_auth(&self.api_key);
        }

        let response = req.send().await?.error_for_status()?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let completion = extract_completion(self.config.provider, &json)?;
        let verdict = parse_verdict(&completion)?;
        Ok(resolve_verdict(&self.sectors, verdict))
    }
}

/// Pull the completion text out of the provider's response envelope.
pub fn extract_completion(provider: LlmProvider, json: &Value) -> Result<String, LlmError> {
    let text = match provider {
        LlmProvider::Cohere => json["text"].as_str(),
        LlmProvider::OpenAiCompatible => json["choices"][0]["message"]["content"].as_str(),
    }
    .ok_or(LlmError::EmptyResponse)?
    .trim()
    .to_string();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}

/// Map a parsed verdict onto the sector table.
///
/// An unknown sector yields no label but keeps the model's reason.
pub fn resolve_verdict(sectors: &SectorTable, verdict: SectorVerdict) -> ClassificationResult {
    let reason = verdict
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REASON.to_string());

    ClassificationResult {
        sector: sectors.resolve(&verdict.sector).map(str::to_string),
        rationale: Some(reason),
    }
}

// ---------------------------------------------------------------------------
// DisabledClassifier
// ---------------------------------------------------------------------------

/// Stand-in used when `llm.enabled = false`: never classifies.
pub struct DisabledClassifier;

#[async_trait]
impl SectorClassifier for DisabledClassifier {
    async fn classify(&self, _org_name: &str) -> Result<ClassificationResult, LlmError> {
        Ok(ClassificationResult::none())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::labels;

    fn make_config(provider: LlmProvider) -> LlmConfig {
        LlmConfig {
            provider,
            base_url: "https://llm.example.com/".into(),
            ..LlmConfig::default()
        }
    }

    fn classifier(provider: LlmProvider) -> ApiClassifier {
        ApiClassifier::from_config(&make_config(provider), "sk-test".into(), SectorTable::builtin())
    }

    #[test]
    fn endpoint_per_provider() {
        assert_eq!(
            classifier(LlmProvider::Cohere).endpoint(),
            "https://llm.example.com/v1/chat"
        );
        assert_eq!(
            classifier(LlmProvider::OpenAiCompatible).endpoint(),
            "https://llm.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn cohere_body_carries_prompt_and_temperature() {
        let body = classifier(LlmProvider::Cohere).request_body("Bangkok Bank");
        assert_eq!(body["model"], "command-r-plus");
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.ends_with("Company: Bangkok Bank")));
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn openai_body_uses_chat_messages() {
        let body = classifier(LlmProvider::OpenAiCompatible).request_body("Bangkok Bank");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Company: Bangkok Bank");
    }

    #[test]
    fn extract_cohere_text() {
        let json = serde_json::json!({ "text": "  {\"sector\": \"Healthcare\"}  " });
        let text = extract_completion(LlmProvider::Cohere, &json).unwrap();
        assert_eq!(text, "{\"sector\": \"Healthcare\"}");
    }

    #[test]
    fn extract_openai_content() {
        let json = serde_json::json!({
            "choices": [{ "message": { "content": "hello" } }]
        });
        assert_eq!(
            extract_completion(LlmProvider::OpenAiCompatible, &json).unwrap(),
            "hello"
        );
    }

    #[test]
    fn extract_missing_or_blank_is_empty_response() {
        let missing = serde_json::json!({ "generation_id": "x" });
        assert!(matches!(
            extract_completion(LlmProvider::Cohere, &missing),
            Err(LlmError::EmptyResponse)
        ));
        let blank = serde_json::json!({ "text": "   " });
        assert!(matches!(
            extract_completion(LlmProvider::Cohere, &blank),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[test]
    fn resolve_verdict_maps_label_drift() {
        let verdict = SectorVerdict {
            sector: "Banking / Finance".into(),
            reason: Some("commercial bank".into()),
        };
        let result = resolve_verdict(&SectorTable::builtin(), verdict);
        assert_eq!(result.sector.as_deref(), Some(labels::FINANCE));
        assert_eq!(result.rationale.as_deref(), Some("commercial bank"));
    }

    #[test]
    fn resolve_verdict_unknown_sector_keeps_reason() {
        let verdict = SectorVerdict {
            sector: "Agriculture".into(),
            reason: Some("rice exporter".into()),
        };
        let result = resolve_verdict(&SectorTable::builtin(), verdict);
        assert!(result.sector.is_none());
        assert_eq!(result.rationale.as_deref(), Some("rice exporter"));
    }

    #[test]
    fn resolve_verdict_default_reason() {
        let verdict = SectorVerdict {
            sector: "Healthcare".into(),
            reason: None,
        };
        let result = resolve_verdict(&SectorTable::builtin(), verdict);
        assert_eq!(result.rationale.as_deref(), Some(DEFAULT_REASON));
    }

    #[tokio::test]
    async fn disabled_classifier_returns_none() {
        let result = DisabledClassifier.classify("anything").await.unwrap();
        assert!(!result.is_classified());
    }

    /// Verify that `ApiClassifier` is object-safe (usable as `dyn SectorClassifier`).
    #[test]
    fn classifier_is_object_safe() {
        let c: Box<dyn SectorClassifier> = Box::new(classifier(LlmProvider::Cohere));
        drop(c);
    }
}
