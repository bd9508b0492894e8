//! folio-tui — the two terminal surfaces of the portfolio.
//!
//! This crate owns presentation and UI state: the ratatui event loop, the
//! full terminal panel and the compact quick bar, input handling, and the
//! section renderers. Command interpretation lives in `folio-core`; the
//! controller here only applies the effects the dispatcher emits.

mod app;
mod cli;
mod input;
mod layout;
mod output;
mod sections;

pub use app::*;
pub use cli::*;
pub use input::*;
pub use layout::*;
pub use output::*;
pub use sections::*;
