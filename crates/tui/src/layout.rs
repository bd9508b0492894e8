//! Layout math, surface modes, and the title/status bars.

use folio_core::Section;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::output::TermTheme;

pub const TERM_SCROLL_STEP: usize = 3;

/// Which of the two surfaces is active. Both call the same dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    /// Full-height terminal panel beside the current section pane.
    Terminal,
    /// Section content fills the screen; a compact quick bar keeps the last
    /// few output lines and the prompt pinned at the bottom.
    Dashboard,
}

impl SurfaceMode {
    pub fn toggle(self) -> Self {
        match self {
            SurfaceMode::Terminal => SurfaceMode::Dashboard,
            SurfaceMode::Dashboard => SurfaceMode::Terminal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SurfaceMode::Terminal => "terminal",
            SurfaceMode::Dashboard => "dashboard",
        }
    }
}

/// Scroll state of the output panel.
#[derive(Debug, Clone, Copy)]
pub struct LogViewState {
    pub scroll_offset: usize,
    pub auto_follow: bool,
    pub body_height: usize,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            auto_follow: true,
            body_height: 1,
        }
    }
}

pub fn calc_log_scroll(log_count: usize, body_height: usize) -> usize {
    log_count.saturating_sub(body_height.max(1))
}

pub fn effective_log_scroll(log_count: usize, view: &LogViewState) -> usize {
    if view.auto_follow {
        calc_log_scroll(log_count, view.body_height)
    } else {
        view.scroll_offset
            .min(calc_log_scroll(log_count, view.body_height))
    }
}

/// Vertical split: title, body, status/quick bar, input.
pub fn surface_constraints(mode: SurfaceMode, quick_bar_lines: u16) -> Vec<Constraint> {
    match mode {
        SurfaceMode::Terminal => vec![
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ],
        SurfaceMode::Dashboard => vec![
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(quick_bar_lines),
            Constraint::Length(3),
        ],
    }
}

/// In terminal mode the body is split between the output log and the
/// current section pane.
pub fn terminal_body_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn build_title_bar(
    user: &str,
    host: &str,
    admin_mode: bool,
    section: Section,
    command_count: usize,
    theme: &TermTheme,
) -> Line<'static> {
    let mode_badge = if admin_mode { " ADMIN " } else { " GUEST " };
    let mode_style = if admin_mode {
        Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };
    Line::from(vec![
        Span::styled(
            format!(" {user}@{host} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(theme.text_muted)),
        Span::styled(mode_badge.to_string(), mode_style),
        Span::styled("| ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("{} ", section.title()),
            Style::default().fg(theme.command_accent),
        ),
        Span::styled(
            format!("| {command_count} commands"),
            Style::default().fg(theme.text_muted),
        ),
    ])
}

pub fn build_status_bar(mode: SurfaceMode, theme: &TermTheme) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            " Tab complete | Up/Down history | Ctrl+T {} | Ctrl+L clear | Ctrl+Q quit",
            match mode {
                SurfaceMode::Terminal => "dashboard view",
                SurfaceMode::Dashboard => "terminal view",
            }
        ),
        Style::default().fg(theme.text_muted),
    ))
}
