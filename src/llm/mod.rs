//! Remote text-generation integration.
//!
//! A single trait seam (`ChatModel`) separates the conversation core from the
//! transport. Production uses `OpenRouterModel` (reqwest against a
//! chat-completion endpoint); tests inject mocks.

pub mod openrouter;
pub(crate) mod retry;

pub use openrouter::OpenRouterModel;
pub use retry::call_with_retry;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Role tag on a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a chat-completion exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A remote text-generation backend.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a message exchange and return the generated text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
