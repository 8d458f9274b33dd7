use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Largest accepted request body. Unset means no limit.
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Overlays `UPSTREAM_URL` and `UPSTREAM_API_KEY` as looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("UPSTREAM_URL") {
            self.upstream.url = url;
        }
        if let Some(api_key) = var("UPSTREAM_API_KEY") {
            self.upstream.api_key = api_key;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.upstream.url.trim().is_empty() {
            return Err(Error::config("upstream.url must not be empty"));
        }
        if self.upstream.api_key.trim().is_empty() {
            return Err(Error::config(
                "upstream.api_key must be set (or provide UPSTREAM_API_KEY)",
            ));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(Error::config("upstream.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            max_body_bytes: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
