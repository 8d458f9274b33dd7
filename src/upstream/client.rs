use super::types::UpstreamPayload;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::{error::Error as _, time::Duration};
use tracing::debug;

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Sends one chat payload and returns the raw JSON body of a successful reply.
    async fn send(&self, payload: &UpstreamPayload) -> Result<Vec<u8>>;
}

pub struct HttpUpstream {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpUpstream {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url,
            api_key: config.api_key,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn send(&self, payload: &UpstreamPayload) -> Result<Vec<u8>> {
        debug!("Forwarding chat payload to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::upstream(describe(&e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::upstream(describe(&e)))?;

        // The body is relayed untouched, but it still has to be JSON.
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| Error::upstream(format!("Invalid JSON from upstream: {}", e)))?;

        debug!("Upstream replied with {} bytes", body.len());

        Ok(body.to_vec())
    }
}

/// Flattens a reqwest error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_str = cause.to_string();
        if !message.contains(&cause_str) {
            message.push_str(": ");
            message.push_str(&cause_str);
        }
        source = cause.source();
    }
    message
}
