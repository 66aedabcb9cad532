//! Scripted provider for tests and local runs without a Google key.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the mock does when `generate` is called.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Echo the last line of the prompt back.
    Echo,
    Reply(String),
    /// Succeed with no candidate text.
    Empty,
    Unauthenticated(String),
    RateLimited(String),
    Unavailable(String),
    Api(String),
    /// Simulate a bug inside the pipeline.
    Panic,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    configured: bool,
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            configured: true,
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// A provider whose credential is missing.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(MockOutcome::Echo)
        }
    }

    /// Number of `generate` calls that reached the provider.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    fn reply(text: Option<String>, prompt: &str) -> ProviderResponse {
        ProviderResponse {
            output_tokens: text.as_ref().map(|t| t.len() as i32 / 4).unwrap_or(0),
            text,
            input_tokens: prompt.len() as i32 / 4,
            finish_reason: FinishReason::Complete,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        if !self.configured {
            return Err(ProviderError::NotConfigured);
        }

        match &self.outcome {
            MockOutcome::Echo => {
                let last_line = prompt.lines().last().unwrap_or_default();
                Ok(Self::reply(
                    Some(format!("Mock response for: {}", last_line)),
                    prompt,
                ))
            }
            MockOutcome::Reply(text) => Ok(Self::reply(Some(text.clone()), prompt)),
            MockOutcome::Empty => Ok(Self::reply(None, prompt)),
            MockOutcome::Unauthenticated(msg) => Err(ProviderError::Unauthenticated(msg.clone())),
            MockOutcome::RateLimited(msg) => Err(ProviderError::RateLimited(msg.clone())),
            MockOutcome::Unavailable(msg) => Err(ProviderError::Unavailable(msg.clone())),
            MockOutcome::Api(msg) => Err(ProviderError::Api(msg.clone())),
            MockOutcome::Panic => panic!("mock provider panicked"),
        }
    }
}
