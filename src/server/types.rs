use serde::Serialize;
use serde_json::{Map, Value};

pub const HOME_MESSAGE: &str = "Gemini AI Chatbot API is running!";
pub const STATUS_MESSAGE: &str = "Gemini AI Chatbot API is operational.";
pub const HISTORY_MESSAGE: &str = "Chat history feature coming soon!";
pub const MISSING_PROMPT_MESSAGE: &str = "Missing 'prompt' in request";

/// Inbound `/chat` body. Only the presence of `prompt` is checked; its value
/// is forwarded as-is.
#[derive(Debug)]
pub struct ChatRequest {
    pub prompt: Value,
}

impl ChatRequest {
    /// Reads `prompt` from a JSON object body. A repeated key keeps its last value.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        let mut object: Map<String, Value> =
            serde_json::from_slice(body).map_err(|e| e.to_string())?;

        object
            .remove("prompt")
            .map(|prompt| Self { prompt })
            .ok_or_else(|| "body has no `prompt` key".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
