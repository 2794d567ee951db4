use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            log_file: "kakeibo_tui.log".to_string(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "kakeibo_tui", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL of the record service (e.g. http://localhost:8000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the log file path. The terminal owns stdout, so logs go here.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("KAKEIBO_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_are_overridden_by_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tui.toml");
        std::fs::write(
            &path,
            "base_url = \"http://192.168.1.10:8000\"\nlog_file = \"/tmp/kakeibo.log\"\n",
        )
        .unwrap();

        let config = load_from(Args {
            config: path.to_str().map(str::to_string),
            base_url: None,
            log_file: None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://192.168.1.10:8000");
        assert_eq!(config.log_file, "/tmp/kakeibo.log");

        let config = load_from(Args {
            config: path.to_str().map(str::to_string),
            base_url: Some("http://localhost:9000".to_string()),
            log_file: None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.log_file, "/tmp/kakeibo.log");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(Args {
            config: dir.path().join("absent.toml").to_str().map(str::to_string),
            ..Args::default()
        })
        .unwrap();

        assert_eq!(config.base_url, AppConfig::default().base_url);
    }
}
