//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as messages.
//! This enables unidirectional data flow and testable update logic.

use crate::data::SortKey;

/// All possible user actions in the application.
///
/// Messages are dispatched from key events and processed by the
/// `App::update()` method.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
    /// Re-fetch tasks for the selected workspace (or workspaces if none)
    Refresh,
    /// Log out, clearing the stored token and all state
    Logout,

    // ─────────────────────────────────────────────────────────────────────────
    // Login form
    // ─────────────────────────────────────────────────────────────────────────
    /// Add a character to the token input
    TokenInput(char),
    /// Remove the last character from the token input
    TokenBackspace,
    /// Submit the entered token and start the authentication check
    SubmitToken,

    // ─────────────────────────────────────────────────────────────────────────
    // Grid navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection up one row
    MoveUp,
    /// Move selection down one row
    MoveDown,
    /// Move selection one card left
    MoveLeft,
    /// Move selection one card right
    MoveRight,
    /// Go to the first card
    GotoTop,
    /// Go to the last card
    GotoBottom,
    /// Open the selected task's URL in the browser
    OpenTask,

    // ─────────────────────────────────────────────────────────────────────────
    // Workspace selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the workspace menu
    ToggleWorkspaceMenu,
    /// Select a workspace by menu index (always refetches, even if current)
    SelectWorkspace(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Filter menus
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the assignee filter menu
    ToggleAssigneeMenu,
    /// Toggle an assignee filter by menu index
    ToggleAssigneeFilter(usize),
    /// Toggle the status filter menu
    ToggleStatusMenu,
    /// Toggle a status filter by menu index
    ToggleStatusFilter(usize),
    /// Toggle the task-type menu
    ToggleTypeMenu,
    /// Set the task-type filter by menu index (0 = all types)
    SetTypeFilter(usize),
    /// Clear all filter and sort selections
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Sort menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the sort menu
    ToggleSortMenu,
    /// Set the sort key (None = default fetch order)
    SetSortKey(Option<SortKey>),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the help modal
    ToggleHelp,
    /// Close the current modal
    CloseModal,
    /// Dismiss the blocking notice popup
    DismissNotice,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys or pending chords)
    None,
}
