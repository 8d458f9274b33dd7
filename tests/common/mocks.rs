use async_trait::async_trait;
use chat_relay::{
    Error, Result,
    upstream::{UpstreamClient, UpstreamPayload},
};
use std::sync::{Arc, Mutex};

/// Mock upstream that records every payload it receives
#[derive(Debug, Clone)]
pub struct MockUpstream {
    pub reply: Vec<u8>,
    pub requests: Arc<Mutex<Vec<UpstreamPayload>>>,
    pub error: Option<String>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            reply: br#"{"choices":[]}"#.to_vec(),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(mut self, reply: &[u8]) -> Self {
        self.reply = reply.to_vec();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<UpstreamPayload> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn send(&self, payload: &UpstreamPayload) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(payload.clone());

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        Ok(self.reply.clone())
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}
