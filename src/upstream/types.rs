use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub messages: Vec<UpstreamMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub content: Value,
}

impl UpstreamPayload {
    /// Wraps a prompt as the single user message of a conversation.
    pub fn from_prompt(prompt: Value) -> Self {
        Self {
            messages: vec![UpstreamMessage::user(prompt)],
        }
    }
}

impl UpstreamMessage {
    pub fn user(content: Value) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}
