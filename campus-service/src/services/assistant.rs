//! CampusGPT response generation.
//!
//! [`CampusAssistant::generate`] never fails: every provider outcome is
//! turned into display text. Only a bug (panic) escapes, and the gateway's
//! panic layer handles that.

use crate::services::providers::{FailureCategory, TextProvider};
use std::sync::Arc;

/// Persona and scope fence prepended to every question. Scope is enforced
/// by the model, not here.
pub const SYSTEM_PROMPT: &str = "You are CampusGPT, an AI college assistant designed to help students with academic and campus-related queries.

ABOUT YOU:
- You help students with academic and campus-related queries
- You have access to timetable, faculty contacts, campus information
- You are patient, clear, and supportive
- You format responses in a readable way with emojis when appropriate

YOUR KNOWLEDGE BASE:
- Timetable: Students can ask about class schedules
- Faculty Contacts: You know professor emails and office locations
- Campus Navigation: You can guide students around campus
- Exam Schedules: You have information about upcoming exams
- General College Info: You help with various student queries

RESPONSE GUIDELINES:
- Be concise but helpful
- Use bullet points or sections for complex information
- Add relevant emojis to make it friendly
- If you don't know something, suggest where they can find the information
- Always maintain a positive and supportive tone

IMPORTANT: You are specifically for college/university context.";

pub const SETUP_REQUIRED_REPLY: &str = "🔑 **AI Setup Required**: Please add your Google API key to the .env file. Get a FREE key from: https://aistudio.google.com/";

pub const API_KEY_ISSUE_REPLY: &str = "🔑 **API Key Issue**: Please check your Google API key.";

pub const SERVICE_BUSY_REPLY: &str =
    "📊 **Service Limit**: The AI service is currently busy. Please try again in a few moments!";

pub const TEMPORARY_ISSUE_REPLY: &str = "😅 **Temporary Issue**: I'm having trouble with the AI service right now. Please try again later!";

/// Assemble the full prompt sent to the provider.
pub fn build_prompt(message: &str) -> String {
    format!(
        "{}\n\nStudent Question: {}\n\nPlease provide a helpful response as CampusGPT:",
        SYSTEM_PROMPT, message
    )
}

/// Display text for a failure category.
pub fn fallback_reply(category: FailureCategory) -> &'static str {
    match category {
        FailureCategory::Credentials => API_KEY_ISSUE_REPLY,
        FailureCategory::Busy => SERVICE_BUSY_REPLY,
        FailureCategory::Transient => TEMPORARY_ISSUE_REPLY,
    }
}

#[derive(Clone)]
pub struct CampusAssistant {
    provider: Arc<dyn TextProvider>,
}

impl CampusAssistant {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn is_ready(&self) -> bool {
        self.provider.is_configured()
    }

    pub async fn generate(&self, message: &str) -> String {
        if !self.provider.is_configured() {
            tracing::warn!("Chat requested but GOOGLE_API_KEY is not configured");
            return SETUP_REQUIRED_REPLY.to_string();
        }

        tracing::info!(message_len = message.len(), "Processing chat message");

        match self.provider.generate(&build_prompt(message)).await {
            Ok(response) => match response.text {
                Some(text) => {
                    tracing::info!(
                        input_tokens = response.input_tokens,
                        output_tokens = response.output_tokens,
                        finish_reason = ?response.finish_reason,
                        "AI response received"
                    );
                    text
                }
                None => {
                    tracing::error!(
                        finish_reason = ?response.finish_reason,
                        "AI response contained no text"
                    );
                    TEMPORARY_ISSUE_REPLY.to_string()
                }
            },
            Err(e) => {
                let category = e.category();
                tracing::error!(error = %e, category = ?category, "AI provider call failed");
                fallback_reply(category).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::{MockOutcome, MockTextProvider};

    fn assistant_with(mock: MockTextProvider) -> (CampusAssistant, Arc<MockTextProvider>) {
        let mock = Arc::new(mock);
        (CampusAssistant::new(mock.clone()), mock)
    }

    #[test]
    fn test_prompt_wraps_message() {
        let prompt = build_prompt("Where is the library?");
        assert!(prompt.starts_with("You are CampusGPT"));
        assert!(prompt.contains("\n\nStudent Question: Where is the library?\n\n"));
        assert!(prompt.ends_with("Please provide a helpful response as CampusGPT:"));
    }

    #[tokio::test]
    async fn test_missing_credential_skips_provider() {
        let (assistant, mock) = assistant_with(MockTextProvider::unconfigured());

        let reply = assistant.generate("hello").await;

        assert_eq!(reply, SETUP_REQUIRED_REPLY);
        assert_eq!(mock.call_count(), 0);
        assert!(!assistant.is_ready());
    }

    #[tokio::test]
    async fn test_success_returns_text_unmodified() {
        let (assistant, mock) = assistant_with(MockTextProvider::new(MockOutcome::Reply(
            "  **Data Structures** is on Monday 9:00 AM  ".to_string(),
        )));

        let reply = assistant.generate("When is my Data Structures class?").await;

        assert_eq!(reply, "  **Data Structures** is on Monday 9:00 AM  ");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(
            mock.last_prompt().unwrap(),
            build_prompt("When is my Data Structures class?")
        );
    }

    #[tokio::test]
    async fn test_quota_and_rate_limit_share_busy_reply() {
        let (quota, _) = assistant_with(MockTextProvider::new(MockOutcome::Api(
            "Resource has been exhausted (e.g. check quota).".to_string(),
        )));
        let (rate, _) = assistant_with(MockTextProvider::new(MockOutcome::Unavailable(
            "hit the rate limit".to_string(),
        )));
        let (typed, _) = assistant_with(MockTextProvider::new(MockOutcome::RateLimited(
            "429".to_string(),
        )));

        assert_eq!(quota.generate("q").await, SERVICE_BUSY_REPLY);
        assert_eq!(rate.generate("q").await, SERVICE_BUSY_REPLY);
        assert_eq!(typed.generate("q").await, SERVICE_BUSY_REPLY);
    }

    #[tokio::test]
    async fn test_credential_failure_reply() {
        let (assistant, _) = assistant_with(MockTextProvider::new(MockOutcome::Api(
            "API key not valid. Please pass a valid API key.".to_string(),
        )));
        assert_eq!(assistant.generate("q").await, API_KEY_ISSUE_REPLY);

        let (assistant, _) = assistant_with(MockTextProvider::new(MockOutcome::Unauthenticated(
            "PERMISSION_DENIED".to_string(),
        )));
        assert_eq!(assistant.generate("q").await, API_KEY_ISSUE_REPLY);
    }

    #[tokio::test]
    async fn test_other_failures_are_transient() {
        let (assistant, _) = assistant_with(MockTextProvider::new(MockOutcome::Unavailable(
            "connection refused".to_string(),
        )));
        assert_eq!(assistant.generate("q").await, TEMPORARY_ISSUE_REPLY);

        let (assistant, _) = assistant_with(MockTextProvider::new(MockOutcome::Empty));
        assert_eq!(assistant.generate("q").await, TEMPORARY_ISSUE_REPLY);
    }
}
