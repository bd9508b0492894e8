//! Error types for the non-dispatch paths (config, content hydration).

use thiserror::Error;

/// Faults from configuration loading and backend hydration. Dispatch itself
/// is total and never returns one of these; unknown input is data.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned unexpected payload: {0}")]
    Backend(String),
}
