//! Input handling — history, keyword completion, scroll keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio_core::Command;

use crate::layout::{calc_log_scroll, effective_log_scroll, LogViewState, TERM_SCROLL_STEP};

/// Per-session command history with draft restore on Down past the newest
/// entry. Duplicates float to the most recent position.
#[derive(Debug, Clone)]
pub struct InputHistory {
    pub entries: Vec<String>,
    pub cursor: Option<usize>,
    pub draft: String,
    pub max_entries: usize,
}

impl InputHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            draft: String::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, entry: String) {
        if entry.trim().is_empty() {
            return;
        }
        self.entries.retain(|existing| existing != &entry);
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        self.cursor = None;
    }

    pub fn up(&mut self, current_input: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        match self.cursor {
            None => {
                self.draft = current_input.to_string();
                self.cursor = Some(self.entries.len() - 1);
            }
            Some(0) => return Some(&self.entries[0]),
            Some(i) => {
                self.cursor = Some(i - 1);
            }
        }
        self.cursor.map(|i| self.entries[i].as_str())
    }

    pub fn down(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(i) if i + 1 >= self.entries.len() => {
                self.cursor = None;
                Some(self.draft.as_str())
            }
            Some(i) => {
                self.cursor = Some(i + 1);
                Some(self.entries[i + 1].as_str())
            }
        }
    }

    pub fn reset(&mut self) {
        self.cursor = None;
        self.draft.clear();
    }
}

#[derive(Debug, Clone)]
pub struct CompletionState {
    pub suggestions: Vec<String>,
    pub selected_index: usize,
}

/// First-argument options for commands that take a fixed vocabulary.
pub fn argument_options(keyword: &str) -> Option<&'static [&'static str]> {
    match keyword {
        "theme" => Some(&["dark", "light"]),
        "sudo" => Some(&["admin", "su"]),
        "git" => Some(&["status", "log"]),
        "cat" => Some(&["about.txt"]),
        "man" => Some(&[
            "help", "whoami", "about", "skills", "projects", "experience", "contact", "clear",
            "ls", "cat", "git", "sudo", "matrix", "coffee", "dashboard",
        ]),
        _ => None,
    }
}

fn parse_tokens(input: &str) -> (String, Vec<String>, bool) {
    let raw = input.trim_start();
    let trailing_space = raw.ends_with(' ') && !raw.is_empty();
    let mut iter = raw.split_whitespace();
    let keyword = iter.next().unwrap_or("").to_string();
    let args = iter.map(|value| value.to_string()).collect();
    (keyword, args, trailing_space)
}

/// Candidate completions for the current input: keyword prefixes first, then
/// first-argument vocabularies. Always sorted so cycling order is stable.
pub fn completion_suggestions(input: &str) -> Vec<String> {
    let (keyword, args, trailing_space) = parse_tokens(input);
    if keyword.is_empty() {
        return Vec::new();
    }
    if args.is_empty() && !trailing_space {
        let mut matches: Vec<String> = Command::KEYWORDS
            .iter()
            .copied()
            .filter(|candidate| candidate.starts_with(&keyword))
            .map(str::to_string)
            .collect();
        matches.sort_unstable();
        return matches;
    }
    if args.len() > 1 {
        return Vec::new();
    }
    let prefix = args.first().map(String::as_str).unwrap_or("");
    let mut matches: Vec<String> = argument_options(&keyword)
        .unwrap_or(&[])
        .iter()
        .copied()
        .filter(|option| option.starts_with(prefix))
        .map(|option| format!("{keyword} {option}"))
        .collect();
    matches.sort_unstable();
    matches
}

/// Tab/Shift+Tab completion: first press fills the best match, repeated
/// presses cycle through the suggestion list.
pub fn apply_completion(
    input: &mut String,
    completion: &mut Option<CompletionState>,
    reverse: bool,
) -> bool {
    if let Some(state) = completion.as_mut()
        && !state.suggestions.is_empty()
        && state.selected_index < state.suggestions.len()
        && input.trim() == state.suggestions[state.selected_index]
    {
        let len = state.suggestions.len();
        state.selected_index = if reverse {
            (state.selected_index + len - 1) % len
        } else {
            (state.selected_index + 1) % len
        };
        *input = state.suggestions[state.selected_index].clone();
        return true;
    }

    let suggestions = completion_suggestions(input);
    if suggestions.is_empty() {
        *completion = None;
        return false;
    }
    let selected_index = if reverse { suggestions.len() - 1 } else { 0 };
    *input = suggestions[selected_index].clone();
    *completion = Some(CompletionState {
        suggestions,
        selected_index,
    });
    true
}

pub fn move_log_scroll(view: &mut LogViewState, log_count: usize, delta: isize) {
    let max_scroll = calc_log_scroll(log_count, view.body_height);
    let current = effective_log_scroll(log_count, view) as isize;
    let next = (current + delta).clamp(0, max_scroll as isize) as usize;
    view.scroll_offset = next;
    view.auto_follow = next >= max_scroll;
}

pub fn handle_log_scroll_key(key: &KeyEvent, view: &mut LogViewState, log_count: usize) -> bool {
    let page = (view.body_height / 2).max(1) as isize;
    match key.code {
        KeyCode::PageUp => {
            move_log_scroll(view, log_count, -page);
            true
        }
        KeyCode::PageDown => {
            move_log_scroll(view, log_count, page);
            true
        }
        KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => {
            view.scroll_offset = 0;
            view.auto_follow = false;
            true
        }
        KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
            view.scroll_offset = calc_log_scroll(log_count, view.body_height);
            view.auto_follow = true;
            true
        }
        _ => false,
    }
}

pub fn handle_log_scroll_mouse(
    mouse: &MouseEvent,
    view: &mut LogViewState,
    log_count: usize,
) -> bool {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            move_log_scroll(view, log_count, -(TERM_SCROLL_STEP as isize));
            true
        }
        MouseEventKind::ScrollDown => {
            move_log_scroll(view, log_count, TERM_SCROLL_STEP as isize);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_navigation_and_draft_restore() {
        let mut history = InputHistory::new(10);
        history.push("help".to_string());
        history.push("skills".to_string());

        assert_eq!(history.up("draft text"), Some("skills"));
        assert_eq!(history.up(""), Some("help"));
        // Pinned at the oldest entry.
        assert_eq!(history.up(""), Some("help"));
        assert_eq!(history.down(), Some("skills"));
        assert_eq!(history.down(), Some("draft text"));
        assert_eq!(history.down(), None);
    }

    #[test]
    fn test_history_dedupes_and_caps() {
        let mut history = InputHistory::new(3);
        for entry in ["a", "b", "a", "c", "d"] {
            history.push(entry.to_string());
        }
        assert_eq!(history.entries, vec!["a", "c", "d"]);
        history.push("   ".to_string());
        assert_eq!(history.entries.len(), 3);
    }

    #[test]
    fn test_completion_cycles_keyword_matches() {
        // "e" matches echo, edit, exit, experience; cycling follows the
        // sorted order regardless of declaration order in the keyword table.
        assert_eq!(
            completion_suggestions("e"),
            vec!["echo", "edit", "exit", "experience"]
        );

        let mut input = "e".to_string();
        let mut state = None;
        assert!(apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "echo");
        assert!(apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "edit");
        assert!(apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "exit");
        assert!(apply_completion(&mut input, &mut state, true));
        assert_eq!(input, "edit");
    }

    #[test]
    fn test_completion_fills_arguments() {
        let mut input = "sudo ".to_string();
        let mut state = None;
        assert!(apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "sudo admin");
        assert!(apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "sudo su");

        let mut themed = "theme d".to_string();
        let mut theme_state = None;
        assert!(apply_completion(&mut themed, &mut theme_state, false));
        assert_eq!(themed, "theme dark");
    }

    #[test]
    fn test_completion_gives_up_without_matches() {
        let mut input = "zzz".to_string();
        let mut state = None;
        assert!(!apply_completion(&mut input, &mut state, false));
        assert_eq!(input, "zzz");
        assert!(state.is_none());

        assert!(completion_suggestions("").is_empty());
        assert!(completion_suggestions("echo a b").is_empty());
    }

    #[test]
    fn test_scroll_key_paging() {
        let mut view = LogViewState {
            scroll_offset: 0,
            auto_follow: true,
            body_height: 10,
        };
        assert!(handle_log_scroll_key(
            &KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            &mut view,
            30
        ));
        assert_eq!(view.scroll_offset, 15);
        assert!(!view.auto_follow);
        assert!(handle_log_scroll_key(
            &KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            &mut view,
            30
        ));
        assert_eq!(view.scroll_offset, 20);
        assert!(view.auto_follow);
    }

    #[test]
    fn test_scroll_mouse_wheel() {
        let mut view = LogViewState {
            scroll_offset: 0,
            auto_follow: true,
            body_height: 10,
        };
        let up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(handle_log_scroll_mouse(&up, &mut view, 30));
        assert_eq!(view.scroll_offset, 17);
        assert!(!view.auto_follow);
    }
}
