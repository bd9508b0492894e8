//! folio-core — domain model for the terminal portfolio.
//!
//! Contains:
//! - Section: the closed set of portfolio views
//! - Command/dispatch: the shell-style command interpreter
//! - PortfolioContent: content snapshots and the built-in sample profile
//! - BackendClient: read-only content hydration from the CMS API
//! - FolioConfig: YAML + environment configuration

mod api;
mod command;
mod config;
mod content;
mod error;
mod reply;
mod section;

pub use api::*;
pub use command::*;
pub use config::*;
pub use content::*;
pub use error::*;
pub use reply::*;
pub use section::*;
