//! Configuration: optional YAML file with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Top-level configuration. Every field has a sensible default so the app
/// runs with no config file at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Backend CMS connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the content API, e.g. `https://cms.example.dev`.
    /// Endpoints are resolved under `{base_url}/api/...`. When unset the
    /// built-in sample content is used.
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip the backend entirely and use the sample content.
    #[serde(default)]
    pub offline: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}

/// Cosmetic terminal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// User shown in the guest prompt (`guest@portfolio ~ $`).
    #[serde(default = "default_user")]
    pub user: String,

    /// Host part of the prompt.
    #[serde(default = "default_host")]
    pub host: String,

    /// Section shown on startup; defaults to the dashboard.
    pub initial_section: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            initial_section: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_host() -> String {
    "portfolio".to_string()
}

impl FolioConfig {
    /// Load from `FOLIO_CONFIG`, else `~/.config/folio/config.yaml`, else
    /// defaults. Environment overrides are applied in all cases.
    pub fn load() -> Result<Self, FolioError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, FolioError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(explicit));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config/folio/config.yaml"))
    }

    /// Field-level environment overrides, highest precedence below CLI flags.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("FOLIO_BACKEND_URL")
            && !url.is_empty()
        {
            self.backend.base_url = Some(url);
        }
        if let Some(offline) = env_bool("FOLIO_OFFLINE") {
            self.backend.offline = offline;
        }
        if let Ok(user) = std::env::var("FOLIO_USER")
            && !user.is_empty()
        {
            self.terminal.user = user;
        }
    }
}

pub fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?.to_lowercase();
    match value.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
