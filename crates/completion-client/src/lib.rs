//! `completion-client` — async client for an OpenAI-style chat-completion API.
//!
//! ```text
//! prompt + model
//!     │
//!     ▼
//! CompletionClient::complete   ← POST {model, messages:[{role:"system", …}]}
//!     │                           Authorization: Bearer <key>
//!     ▼
//! ChatResponse                 ← lenient decode of {choices:[{message:{content}}]}
//!     │
//!     ▼
//! Completion::{Content, Missing}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use completion_client::CompletionClient;
//!
//! let client = CompletionClient::new(&config)?;
//! let text = client.complete("Plan a weather station", "mistral-medium").await?.into_text();
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::CompletionClient;
pub use error::CompletionError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Completion, Role, NO_RESPONSE};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, CompletionError>;
