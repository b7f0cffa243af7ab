#![allow(non_snake_case)]

mod cli;

use std::env;

use onThisDay::config::{AppConfig, Settings};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stderr only, quiet by default so prompts stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_else(|err| {
            warn!(error = %err, "ignoring config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };
    let settings = Settings::resolve(&config)?;

    cli::cli(settings).await
}
