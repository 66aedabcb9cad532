//! Gemini AI provider implementation.
//!
//! Calls the `generateContent` REST method of Google's Generative Language
//! API and maps HTTP outcomes onto [`ProviderError`].

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on a single completion round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::NotConfigured)
    }

    /// Build the API URL for the configured model and method.
    fn api_url(&self, method: &str, api_key: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method,
            api_key
        )
    }
}

/// Turn a non-2xx Gemini reply into a typed error.
fn error_from_status(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthenticated(message),
        s if s.is_server_error() => {
            ProviderError::Unavailable(format!("Gemini API error {}: {}", s, message))
        }
        s => ProviderError::Api(format!("Gemini API error {}: {}", s, message)),
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let api_key = self.api_key()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &error_text));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Api(format!("Failed to parse response: {}", e)))?;

        if let Some(reason) = api_response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(ProviderError::Api(format!("Prompt blocked: {}", reason)));
        }

        let candidate = api_response.candidates.first();

        let finish_reason = candidate
            .map(|c| match c.finish_reason.as_deref() {
                Some("STOP") | None => FinishReason::Complete,
                Some("MAX_TOKENS") => FinishReason::Length,
                Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") => {
                    FinishReason::ContentFilter
                }
                Some(_) => FinishReason::Error,
            })
            .unwrap_or(FinishReason::Error);

        // Multi-part candidates are joined, matching the SDK's `text()` helper
        let text = candidate
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());

        if text.is_none() && finish_reason == FinishReason::ContentFilter {
            return Err(ProviderError::Api("Response blocked by safety filters".to_string()));
        }

        let usage = api_response.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::FailureCategory;

    fn provider(api_key: Option<&str>) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            api_base: "https://example.invalid/v1beta/".to_string(),
        })
        .expect("Failed to create provider")
    }

    #[test]
    fn test_api_url_shape() {
        let p = provider(Some("k"));
        assert_eq!(
            p.api_url("generateContent", "k"),
            "https://example.invalid/v1beta/models/gemini-2.5-flash:generateContent?key=k"
        );
    }

    #[test]
    fn test_empty_key_is_not_configured() {
        assert!(!provider(Some("")).is_configured());
        assert!(!provider(None).is_configured());
        assert!(provider(Some("abc")).is_configured());
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let err = provider(None).generate("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured));
    }

    #[test]
    fn test_error_status_mapping() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = error_from_status(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ProviderError::Api(_)));
        assert_eq!(err.category(), FailureCategory::Credentials);

        let err = error_from_status(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, ProviderError::RateLimited(_)));

        let err = error_from_status(StatusCode::FORBIDDEN, "{}");
        assert!(matches!(err, ProviderError::Unauthenticated(_)));

        let err = error_from_status(StatusCode::SERVICE_UNAVAILABLE, "overloaded");
        assert!(matches!(err, ProviderError::Unavailable(_)));
        assert_eq!(err.category(), FailureCategory::Transient);
    }
}
