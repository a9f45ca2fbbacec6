//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key events to messages based on current app mode. Handles the
//! `gg` chord with a non-blocking state machine.

use super::{App, Message, ModalState};
use crate::data::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// State machine for handling key chords (gg).
///
/// Instead of blocking with `event::poll()` inline, we track the pending
/// key and check for timeout in the main event loop.
#[derive(Debug, Default)]
pub struct InputState {
    /// The first key of a potential chord sequence
    pub pending: Option<KeyCode>,
    /// When the pending key was pressed (for timeout detection)
    pub pending_since: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's a pending chord that has timed out (500ms).
    pub fn has_timed_out(&self) -> bool {
        if let Some(since) = self.pending_since {
            since.elapsed().as_millis() > 500
        } else {
            false
        }
    }

    /// Clear the pending chord state.
    pub fn clear(&mut self) {
        self.pending = None;
        self.pending_since = None;
    }

    /// Set a pending chord key.
    pub fn set_pending(&mut self, key: KeyCode) {
        self.pending = Some(key);
        self.pending_since = Some(Instant::now());
    }
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    // Ctrl-C always quits, whatever the mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Message::Quit;
    }

    // A blocking notice swallows the next key press
    if app.notice.is_some() {
        return Message::DismissNotice;
    }

    // Handle pending chords first
    if let Some(pending) = input.pending.take() {
        input.pending_since = None;
        return handle_chord(pending, key.code);
    }

    if !app.authenticated {
        return dispatch_login(key);
    }

    match app.modal {
        ModalState::WorkspaceMenu => dispatch_workspace_menu(key),
        ModalState::AssigneeMenu => dispatch_assignee_menu(key),
        ModalState::StatusMenu => dispatch_status_menu(key),
        ModalState::TypeMenu => dispatch_type_menu(key),
        ModalState::SortMenu => dispatch_sort_menu(key),
        ModalState::Help => dispatch_help(key),
        ModalState::None => dispatch_normal_mode(input, key),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys on the login form.
fn dispatch_login(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Enter => Message::SubmitToken,
        KeyCode::Backspace => Message::TokenBackspace,
        KeyCode::Esc => Message::Quit,
        KeyCode::Char(c) => Message::TokenInput(c),
        _ => Message::None,
    }
}

/// Handle keys in normal mode (task grid).
fn dispatch_normal_mode(input: &mut InputState, key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('h') | KeyCode::Left => Message::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right => Message::MoveRight,
        KeyCode::Char('G') => Message::GotoBottom,
        KeyCode::Char('g') => {
            input.set_pending(KeyCode::Char('g'));
            Message::None
        }
        KeyCode::Enter => Message::OpenTask,
        KeyCode::Char('r') => Message::Refresh,
        KeyCode::Char('w') => Message::ToggleWorkspaceMenu,
        KeyCode::Char('a') => Message::ToggleAssigneeMenu,
        KeyCode::Char('s') => Message::ToggleStatusMenu,
        KeyCode::Char('t') => Message::ToggleTypeMenu,
        KeyCode::Char('o') => Message::ToggleSortMenu,
        KeyCode::Char('c') => Message::ClearFilters,
        KeyCode::Char('L') => Message::Logout,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => Message::None,
    }
}

fn handle_chord(pending: KeyCode, second: KeyCode) -> Message {
    match (pending, second) {
        (KeyCode::Char('g'), KeyCode::Char('g')) => Message::GotoTop,
        _ => Message::None,
    }
}

fn dispatch_workspace_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('w') => Message::CloseModal,
        KeyCode::Char(c @ '1'..='9') => {
            Message::SelectWorkspace(c.to_digit(10).unwrap() as usize - 1)
        }
        _ => Message::None,
    }
}

fn dispatch_assignee_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => Message::CloseModal,
        KeyCode::Char('c') => Message::ClearFilters,
        KeyCode::Char(c @ '1'..='9') => {
            Message::ToggleAssigneeFilter(c.to_digit(10).unwrap() as usize - 1)
        }
        _ => Message::None,
    }
}

fn dispatch_status_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => Message::CloseModal,
        KeyCode::Char('c') => Message::ClearFilters,
        KeyCode::Char(c @ '1'..='9') => {
            Message::ToggleStatusFilter(c.to_digit(10).unwrap() as usize - 1)
        }
        _ => Message::None,
    }
}

fn dispatch_type_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => Message::CloseModal,
        KeyCode::Char(c @ '0'..='9') => Message::SetTypeFilter(c.to_digit(10).unwrap() as usize),
        _ => Message::None,
    }
}

fn dispatch_sort_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('o') => Message::CloseModal,
        KeyCode::Char('0') => Message::SetSortKey(None),
        KeyCode::Char(c @ '1'..='9') => {
            match SortKey::from_index(c.to_digit(10).unwrap() as usize) {
                Some(sort) => Message::SetSortKey(Some(sort)),
                None => Message::None,
            }
        }
        _ => Message::None,
    }
}

fn dispatch_help(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Message::CloseModal,
        _ => Message::None,
    }
}
