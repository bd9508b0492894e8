//! Dispatcher output: replies and the effects they request.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Display hint for a terminal output line. Presentational only — unknown
/// input is ordinary data tagged `Error`, not an exceptional control path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    System,
    Info,
    Success,
    Warning,
    Error,
    Section,
    Command,
}

impl ReplyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyKind::System => "system",
            ReplyKind::Info => "info",
            ReplyKind::Success => "success",
            ReplyKind::Warning => "warning",
            ReplyKind::Error => "error",
            ReplyKind::Section => "section",
            ReplyKind::Command => "command",
        }
    }
}

/// A state change the dispatcher asks its owning controller to perform.
///
/// The dispatcher never mutates UI state itself; it emits one of these and
/// the controller applies it after appending the reply lines to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Switch the visible content section.
    Navigate(Section),
    /// Flip the client-side admin flag. Not a security boundary.
    ToggleAdminMode,
    /// Erase the output log and reset the section to the welcome default.
    ClearScreen,
}

/// Result of one dispatch call, consumed immediately by the calling surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub kind: ReplyKind,
    pub lines: Vec<String>,
    pub section: Option<Section>,
    pub effect: Option<UiEffect>,
}

impl CommandReply {
    pub fn new(kind: ReplyKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            lines,
            section: None,
            effect: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(ReplyKind::Info, vec![text.into()])
    }

    pub fn info_lines(lines: Vec<String>) -> Self {
        Self::new(ReplyKind::Info, lines)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ReplyKind::Success, vec![text.into()])
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(ReplyKind::Warning, vec![text.into()])
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ReplyKind::Error, vec![text.into()])
    }

    pub fn error_lines(lines: Vec<String>) -> Self {
        Self::new(ReplyKind::Error, lines)
    }

    /// Section-navigation reply: empty content, the target section rendered
    /// by the surface itself.
    pub fn navigate(section: Section) -> Self {
        Self {
            kind: ReplyKind::Section,
            lines: Vec::new(),
            section: Some(section),
            effect: Some(UiEffect::Navigate(section)),
        }
    }

    pub fn with_effect(mut self, effect: UiEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Content joined into one newline-separated string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_reply_shape() {
        let reply = CommandReply::navigate(Section::About);
        assert_eq!(reply.kind, ReplyKind::Section);
        assert!(reply.lines.is_empty());
        assert_eq!(reply.section, Some(Section::About));
        assert_eq!(reply.effect, Some(UiEffect::Navigate(Section::About)));
    }

    #[test]
    fn test_text_joins_lines() {
        let reply = CommandReply::info_lines(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(reply.text(), "a\nb");
    }
}
