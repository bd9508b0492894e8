//! Output log — entries, cap, and per-kind styling.

use folio_core::ReplyKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Hard cap on retained output lines; the oldest are dropped past it.
pub const MAX_TERM_ENTRIES: usize = 500;

/// One line in the session output log.
#[derive(Debug, Clone, PartialEq)]
pub struct TermEntry {
    pub kind: ReplyKind,
    pub text: String,
}

impl TermEntry {
    pub fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub fn push_entry(entries: &mut Vec<TermEntry>, entry: TermEntry) {
    entries.push(entry);
    if entries.len() > MAX_TERM_ENTRIES {
        let overflow = entries.len() - MAX_TERM_ENTRIES;
        entries.drain(0..overflow);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TermTheme {
    pub text_base: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub command_accent: Color,
    pub border_normal: Color,
    pub border_active: Color,
}

impl TermTheme {
    pub fn default_dark() -> Self {
        Self {
            text_base: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Green,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            info: Color::Blue,
            command_accent: Color::Cyan,
            border_normal: Color::DarkGray,
            border_active: Color::Green,
        }
    }
}

pub fn entry_style(kind: ReplyKind, theme: &TermTheme) -> Style {
    match kind {
        ReplyKind::System => Style::default().fg(theme.text_muted),
        ReplyKind::Info => Style::default().fg(theme.text_base),
        ReplyKind::Success => Style::default().fg(theme.success),
        ReplyKind::Warning => Style::default().fg(theme.warning),
        ReplyKind::Error => Style::default().fg(theme.danger),
        ReplyKind::Section => Style::default().fg(theme.info),
        ReplyKind::Command => Style::default()
            .fg(theme.command_accent)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn entry_line(entry: &TermEntry, theme: &TermTheme) -> Line<'static> {
    Line::from(Span::styled(
        entry.text.clone(),
        entry_style(entry.kind, theme),
    ))
}

pub fn styled_log_lines(entries: &[TermEntry], theme: &TermTheme) -> Vec<Line<'static>> {
    entries.iter().map(|entry| entry_line(entry, theme)).collect()
}

/// The quick bar shows only the tail of the log.
pub fn last_entries(entries: &[TermEntry], count: usize) -> &[TermEntry] {
    let start = entries.len().saturating_sub(count);
    &entries[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_entry_caps_log() {
        let mut entries = Vec::new();
        for i in 0..(MAX_TERM_ENTRIES + 25) {
            push_entry(&mut entries, TermEntry::new(ReplyKind::Info, format!("{i}")));
        }
        assert_eq!(entries.len(), MAX_TERM_ENTRIES);
        assert_eq!(entries[0].text, "25"); // oldest dropped
        assert_eq!(
            entries.last().unwrap().text,
            format!("{}", MAX_TERM_ENTRIES + 24)
        );
    }

    #[test]
    fn test_last_entries_tail() {
        let entries: Vec<TermEntry> = (0..5)
            .map(|i| TermEntry::new(ReplyKind::Info, format!("{i}")))
            .collect();
        let tail = last_entries(&entries, 2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].text, "3");
        assert_eq!(last_entries(&entries, 10).len(), 5);
    }

    #[test]
    fn test_entry_styles_differ_by_kind() {
        let theme = TermTheme::default_dark();
        assert_ne!(
            entry_style(ReplyKind::Error, &theme),
            entry_style(ReplyKind::Success, &theme)
        );
        assert_ne!(
            entry_style(ReplyKind::Command, &theme),
            entry_style(ReplyKind::Info, &theme)
        );
    }
}
