//! Session controller and the terminal event loop.
//!
//! [`TerminalState`] owns everything the dispatcher is not allowed to touch:
//! the current section, the admin flag, the output log, and the input line.
//! Replies come back from `folio_core::dispatch` as data; `apply_reply`
//! appends their lines first and applies the requested effects second, so
//! the printed text and the resulting state always agree.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use folio_core::{
    dispatch, CommandContext, CommandReply, PortfolioContent, ReplyKind, Section, UiEffect,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::input::{
    apply_completion, handle_log_scroll_key, handle_log_scroll_mouse, CompletionState,
    InputHistory,
};
use crate::layout::{
    build_status_bar, build_title_bar, effective_log_scroll, surface_constraints,
    terminal_body_split, LogViewState, SurfaceMode,
};
use crate::output::{last_entries, push_entry, styled_log_lines, TermEntry, TermTheme};
use crate::sections::render_section;

const INPUT_HISTORY_CAP: usize = 100;
const QUICK_BAR_LINES: u16 = 2;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything one interactive session owns.
pub struct TerminalState {
    pub content: PortfolioContent,
    pub current_section: Section,
    pub admin_mode: bool,
    pub entries: Vec<TermEntry>,
    pub command_count: usize,
    pub surface: SurfaceMode,
    pub user: String,
    pub host: String,
    pub input: String,
    pub history: InputHistory,
    pub completion: Option<CompletionState>,
    pub log_view: LogViewState,
    pub theme: TermTheme,
    pub should_quit: bool,
}

impl TerminalState {
    pub fn new(content: PortfolioContent, user: String, host: String, section: Section) -> Self {
        let mut state = Self {
            content,
            current_section: section,
            admin_mode: false,
            entries: Vec::new(),
            command_count: 0,
            surface: SurfaceMode::Terminal,
            user,
            host,
            input: String::new(),
            history: InputHistory::new(INPUT_HISTORY_CAP),
            completion: None,
            log_view: LogViewState::default(),
            theme: TermTheme::default_dark(),
            should_quit: false,
        };
        state.seed_welcome();
        state
    }

    fn seed_welcome(&mut self) {
        for line in [
            "Portfolio Terminal v2.0.1 initialized...",
            "Type \"help\" to see available commands.",
            "Press Tab to complete command names.",
        ] {
            push_entry(&mut self.entries, TermEntry::new(ReplyKind::System, line));
        }
    }

    pub fn prompt(&self) -> String {
        let mark = if self.admin_mode { "#" } else { "$" };
        format!("{}@{}:~{mark} ", self.user, self.host)
    }

    /// Echo and interpret the current input line.
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.completion = None;
        self.history.reset();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        push_entry(
            &mut self.entries,
            TermEntry::new(ReplyKind::Command, format!("$ {trimmed}")),
        );
        self.history.push(trimmed.to_string());
        self.command_count += 1;

        let lowered = trimmed.to_lowercase();
        let reply = {
            let ctx = CommandContext {
                content: &self.content,
                admin_mode: self.admin_mode,
            };
            dispatch(&lowered, &ctx)
        };
        self.apply_reply(reply);
        self.log_view.auto_follow = true;
    }

    /// Append the reply's lines, then apply its effect. Order matters: the
    /// sudo message is worded for the state after the toggle.
    pub fn apply_reply(&mut self, reply: CommandReply) {
        if reply.kind == ReplyKind::Section && reply.lines.is_empty() {
            if let Some(section) = reply.section {
                push_entry(
                    &mut self.entries,
                    TermEntry::new(ReplyKind::Section, format!("Opened {}", section.title())),
                );
            }
        }
        for line in &reply.lines {
            push_entry(&mut self.entries, TermEntry::new(reply.kind, line.clone()));
        }
        match reply.effect {
            Some(UiEffect::Navigate(section)) => self.current_section = section,
            Some(UiEffect::ToggleAdminMode) => self.admin_mode = !self.admin_mode,
            Some(UiEffect::ClearScreen) => self.clear_screen(),
            None => {}
        }
    }

    pub fn clear_screen(&mut self) {
        self.entries.clear();
        self.current_section = Section::Dashboard;
        self.log_view = LogViewState::default();
    }
}

pub async fn run_app(mut state: TerminalState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TerminalState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, state))?;
        if state.should_quit {
            return Ok(());
        }
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
            Event::Mouse(mouse) => {
                handle_log_scroll_mouse(&mouse, &mut state.log_view, state.entries.len());
            }
            _ => {}
        }
    }
}

fn handle_key(state: &mut TerminalState, key: event::KeyEvent) {
    if handle_log_scroll_key(&key, &mut state.log_view, state.entries.len()) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => state.should_quit = true,
            KeyCode::Char('c') => {
                state.input.clear();
                state.completion = None;
                state.history.reset();
            }
            KeyCode::Char('l') => state.clear_screen(),
            KeyCode::Char('t') => state.surface = state.surface.toggle(),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Enter => state.submit(),
        KeyCode::Up => {
            if let Some(entry) = state.history.up(&state.input.clone()) {
                state.input = entry.to_string();
            }
        }
        KeyCode::Down => {
            if let Some(entry) = state.history.down() {
                state.input = entry.to_string();
            }
        }
        KeyCode::Tab => {
            apply_completion(&mut state.input, &mut state.completion, false);
        }
        KeyCode::BackTab => {
            apply_completion(&mut state.input, &mut state.completion, true);
        }
        KeyCode::Backspace => {
            state.input.pop();
            state.completion = None;
        }
        KeyCode::Esc => {
            state.input.clear();
            state.completion = None;
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            state.completion = None;
        }
        _ => {}
    }
}

fn draw(frame: &mut Frame<'_>, state: &mut TerminalState) {
    let quick_bar = match state.surface {
        SurfaceMode::Terminal => 1,
        SurfaceMode::Dashboard => QUICK_BAR_LINES,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(surface_constraints(state.surface, quick_bar))
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(build_title_bar(
            &state.user,
            &state.host,
            state.admin_mode,
            state.current_section,
            state.command_count,
            &state.theme,
        )),
        chunks[0],
    );

    match state.surface {
        SurfaceMode::Terminal => {
            let (log_area, section_area) = terminal_body_split(chunks[1]);
            draw_log(frame, state, log_area);
            draw_section_pane(frame, state, section_area);
            frame.render_widget(Paragraph::new(build_status_bar(state.surface, &state.theme)), chunks[2]);
        }
        SurfaceMode::Dashboard => {
            // The log pane is hidden here, but scroll keys still act on it;
            // keep the view height in step with what the pane would show.
            state.log_view.body_height =
                (chunks[1].height.saturating_sub(2) as usize).max(1);
            draw_section_pane(frame, state, chunks[1]);
            draw_quick_bar(frame, state, chunks[2]);
        }
    }

    draw_input(frame, state, chunks[3]);
}

fn draw_log(frame: &mut Frame<'_>, state: &mut TerminalState, area: ratatui::layout::Rect) {
    let body_height = area.height.saturating_sub(2) as usize;
    state.log_view.body_height = body_height.max(1);
    let scroll = effective_log_scroll(state.entries.len(), &state.log_view);
    let paragraph = Paragraph::new(styled_log_lines(&state.entries, &state.theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.border_active))
                .title(" output "),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn draw_section_pane(frame: &mut Frame<'_>, state: &TerminalState, area: ratatui::layout::Rect) {
    let lines = render_section(
        state.current_section,
        &state.content,
        state.admin_mode,
        &state.theme,
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.border_normal))
                .title(format!(" {} ", state.current_section.title())),
        );
    frame.render_widget(paragraph, area);
}

fn draw_quick_bar(frame: &mut Frame<'_>, state: &TerminalState, area: ratatui::layout::Rect) {
    let lines: Vec<Line<'static>> = last_entries(&state.entries, QUICK_BAR_LINES as usize)
        .iter()
        .map(|entry| crate::output::entry_line(entry, &state.theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame<'_>, state: &TerminalState, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(
            state.prompt(),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.input.clone(),
            Style::default().fg(state.theme.text_base),
        ),
        Span::styled("▌", Style::default().fg(state.theme.command_accent)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.border_active)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TerminalState {
        TerminalState::new(
            PortfolioContent::sample(),
            "guest".to_string(),
            "portfolio".to_string(),
            Section::Dashboard,
        )
    }

    #[test]
    fn test_new_state_seeds_welcome_banner() {
        let state = state();
        assert_eq!(state.entries.len(), 3);
        assert!(state.entries[0].text.contains("Portfolio Terminal"));
        assert_eq!(state.current_section, Section::Dashboard);
        assert!(!state.admin_mode);
    }

    #[test]
    fn test_submit_echoes_and_navigates() {
        let mut state = state();
        state.input = "skills".to_string();
        state.submit();
        assert_eq!(state.current_section, Section::Skills);
        assert_eq!(state.command_count, 1);
        let texts: Vec<&str> = state.entries.iter().map(|e| e.text.as_str()).collect();
        assert!(texts.contains(&"$ skills"));
        assert!(texts.contains(&"Opened Skills"));
    }

    #[test]
    fn test_submit_lowercases_before_dispatch() {
        let mut state = state();
        state.input = "  SKILLS  ".to_string();
        state.submit();
        assert_eq!(state.current_section, Section::Skills);
        // The echo keeps the user's casing, trimmed.
        assert!(state.entries.iter().any(|e| e.text == "$ SKILLS"));
    }

    #[test]
    fn test_submit_ignores_blank_input() {
        let mut state = state();
        state.input = "   ".to_string();
        state.submit();
        assert_eq!(state.command_count, 0);
        assert_eq!(state.entries.len(), 3); // banner only
    }

    #[test]
    fn test_sudo_message_matches_resulting_state() {
        let mut state = state();
        state.input = "sudo su".to_string();
        state.submit();
        assert!(state.admin_mode);
        assert!(state
            .entries
            .iter()
            .any(|e| e.text.contains("Admin mode activated")));

        state.input = "sudo su".to_string();
        state.submit();
        assert!(!state.admin_mode);
        assert!(state
            .entries
            .iter()
            .any(|e| e.text.contains("Admin mode deactivated")));
    }

    #[test]
    fn test_clear_wipes_log_and_resets_section() {
        let mut state = state();
        state.input = "about".to_string();
        state.submit();
        assert_eq!(state.current_section, Section::About);

        state.input = "clear".to_string();
        state.submit();
        assert!(state.entries.is_empty());
        assert_eq!(state.current_section, Section::Dashboard);
        // The counter survives the wipe.
        assert_eq!(state.command_count, 2);
    }

    #[test]
    fn test_unknown_command_logs_error_without_navigation() {
        let mut state = state();
        state.input = "frobnicate".to_string();
        state.submit();
        assert_eq!(state.current_section, Section::Dashboard);
        assert!(state
            .entries
            .iter()
            .any(|e| e.kind == ReplyKind::Error && e.text.contains("frobnicate")));
    }

    #[test]
    fn test_draw_refreshes_log_height_in_both_surfaces() {
        use ratatui::backend::TestBackend;

        let mut state = state();
        for view in [SurfaceMode::Terminal, SurfaceMode::Dashboard] {
            state.surface = view;
            state.log_view.body_height = 1;
            let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
            terminal.draw(|frame| draw(frame, &mut state)).unwrap();
            assert!(state.log_view.body_height > 1, "{} surface", view.label());
        }
    }

    #[test]
    fn test_prompt_reflects_admin_mode() {
        let mut state = state();
        assert_eq!(state.prompt(), "guest@portfolio:~$ ");
        state.admin_mode = true;
        assert_eq!(state.prompt(), "guest@portfolio:~# ");
    }
}
