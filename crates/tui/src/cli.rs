//! Command-line entry point: flags, config, tracing, content hydration.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{BackendClient, FolioConfig, PortfolioContent, Section};
use tracing_subscriber::EnvFilter;

use crate::app::{run_app, TerminalState};

/// Interactive terminal portfolio.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Path to a config file (default: FOLIO_CONFIG or ~/.config/folio/config.yaml).
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Base URL of the content backend, e.g. http://localhost:8000.
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Skip the backend and use the built-in content.
    #[arg(long)]
    pub offline: bool,

    /// Section to show on startup.
    #[arg(long)]
    pub section: Option<String>,

    /// Start with admin mode already enabled.
    #[arg(long)]
    pub admin: bool,
}

/// File-based tracing, enabled only when `FOLIO_LOG` names a path. Stdout
/// belongs to the TUI, so there is no console layer.
fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("FOLIO_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("opening log file {path}"))?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("installing tracing subscriber: {error}"))?;
    Ok(())
}

async fn load_content(config: &FolioConfig) -> PortfolioContent {
    if config.backend.offline {
        tracing::info!("offline mode, using built-in content");
        return PortfolioContent::sample();
    }
    let Some(base_url) = config.backend.base_url.as_deref() else {
        return PortfolioContent::sample();
    };
    let timeout = Duration::from_secs(config.backend.timeout_secs);
    match BackendClient::new(base_url, timeout) {
        Ok(client) => client.fetch_or_sample().await,
        Err(error) => {
            tracing::warn!(%error, "backend client setup failed, using built-in content");
            PortfolioContent::sample()
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let mut config = match &cli.config {
        Some(path) => {
            let mut loaded = FolioConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            loaded.apply_env();
            loaded
        }
        None => FolioConfig::load()?,
    };
    if let Some(url) = cli.backend_url {
        config.backend.base_url = Some(url);
    }
    if cli.offline {
        config.backend.offline = true;
    }

    let section = cli
        .section
        .as_deref()
        .or(config.terminal.initial_section.as_deref())
        .and_then(Section::parse)
        .unwrap_or(Section::Dashboard);

    let content = load_content(&config).await;
    tracing::info!(
        user = %config.terminal.user,
        %section,
        "starting terminal session"
    );

    let mut state = TerminalState::new(
        content,
        config.terminal.user.clone(),
        config.terminal.host.clone(),
        section,
    );
    state.admin_mode = cli.admin;
    run_app(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "folio",
            "--offline",
            "--section",
            "skills",
            "--backend-url",
            "http://localhost:8000",
        ]);
        assert!(cli.offline);
        assert_eq!(cli.section.as_deref(), Some("skills"));
        assert_eq!(
            cli.backend_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert!(!cli.admin);
    }

    #[tokio::test]
    async fn test_load_content_offline_uses_sample() {
        let mut config = FolioConfig::default();
        config.backend.offline = true;
        config.backend.base_url = Some("http://localhost:1".to_string());
        let content = load_content(&config).await;
        assert_eq!(content, PortfolioContent::sample());
    }

    #[tokio::test]
    async fn test_load_content_without_url_uses_sample() {
        let config = FolioConfig::default();
        let content = load_content(&config).await;
        assert_eq!(content, PortfolioContent::sample());
    }
}
