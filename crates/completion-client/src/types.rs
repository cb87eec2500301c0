//! Wire types for the chat-completion endpoint.
//!
//! Response types are deliberately lenient: every level of
//! `choices[0].message.content` may be absent, and absence is reported as
//! [`Completion::Missing`] instead of a decode error.

use serde::{Deserialize, Serialize};

/// Substituted for the completion text when the provider sent none.
pub const NO_RESPONSE: &str = "No response from AI";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// A single system message carrying the whole prompt.
    pub fn system(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: Role::System,
                content: prompt.into(),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Outcome of a successful call: either the first choice's text, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Content(String),
    Missing,
}

impl Completion {
    pub fn is_missing(&self) -> bool {
        matches!(self, Completion::Missing)
    }

    /// The completion text, or [`NO_RESPONSE`] when there was none.
    pub fn into_text(self) -> String {
        match self {
            Completion::Content(text) => text,
            Completion::Missing => NO_RESPONSE.to_string(),
        }
    }
}

impl From<ChatResponse> for Completion {
    fn from(resp: ChatResponse) -> Self {
        resp.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .map_or(Completion::Missing, Completion::Content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
