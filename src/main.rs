use anyhow::Result;
use chat_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter, accepting a bare level or full `RUST_LOG` directives
fn build_filter(level: &str) -> Result<EnvFilter> {
    let is_directive_list = level.contains('=') || level.contains(',');
    if !is_directive_list && level.parse::<LevelFilter>().is_err() {
        anyhow::bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        );
    }

    EnvFilter::try_new(level).map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", level, e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match build_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting chat relay with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
