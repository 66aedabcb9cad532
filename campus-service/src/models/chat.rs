use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The trimmed message, or `None` when it is missing or blank.
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Ai,
    Error,
}

/// Chat envelope. `reply` is always present, even when the provider failed.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResult {
    pub success: bool,
    pub reply: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    #[serde(serialize_with = "super::serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ChatResult {
    pub fn ai(reply: String) -> Self {
        Self {
            success: true,
            reply,
            kind: ReplyKind::Ai,
            timestamp: Utc::now(),
        }
    }
}
