mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

/// Reads the YAML file at `config_path`, then applies environment overrides.
pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;
    config.apply_env(|key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

/// Parses and validates a YAML document without consulting the environment.
pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}
