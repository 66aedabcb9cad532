//! Generative-AI provider abstraction.
//!
//! The assistant talks to providers through [`TextProvider`] so the Gemini
//! backend can be swapped for a scripted double in tests. Providers report
//! failures as a typed [`ProviderError`]; [`ProviderError::category`] folds
//! them into the three user-facing failure categories.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: API key missing")]
    NotConfigured,

    #[error("API key rejected by provider: {0}")]
    Unauthenticated(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("API error: {0}")]
    Api(String),
}

/// User-facing failure buckets, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// The credential is missing, malformed or rejected.
    Credentials,
    /// Quota exhausted or throttled.
    Busy,
    /// Everything else.
    Transient,
}

impl ProviderError {
    pub fn category(&self) -> FailureCategory {
        match self {
            ProviderError::NotConfigured | ProviderError::Unauthenticated(_) => {
                FailureCategory::Credentials
            }
            ProviderError::RateLimited(_) => FailureCategory::Busy,
            ProviderError::Unavailable(msg) | ProviderError::Api(msg) => classify_message(msg),
        }
    }
}

/// Fallback for errors the provider did not tag: look for the wording the
/// Gemini API uses in its error bodies.
fn classify_message(message: &str) -> FailureCategory {
    if message.contains("API_KEY") || message.contains("API key") {
        FailureCategory::Credentials
    } else if message.contains("quota") || message.contains("rate limit") {
        FailureCategory::Busy
    } else {
        FailureCategory::Transient
    }
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Completion text; `None` when the provider returned no candidate.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Error,
}

/// Trait for single-shot text completion providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Whether a credential is present. Checked before any network call.
    fn is_configured(&self) -> bool;

    /// Generate a completion for a fully assembled prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}
