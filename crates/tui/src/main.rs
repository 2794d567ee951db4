mod app;
mod client;
mod config;
mod error;
mod ui;

#[cfg(test)]
mod test_support;

use std::{fs::OpenOptions, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config.log_file)?;
    tracing::info!("using record service at {}", config.base_url);

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

/// Logs go to a file: the terminal UI owns stdout.
fn init_logging(path: &str) -> Result<()> {
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kakeibo_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .init();
    Ok(())
}
