//! TUI rendering module.
//!
//! - `icons` - status icons for task cards
//! - `layout` - layout calculations and text utilities
//! - `login` - token entry form
//! - `cards` - the responsive task card grid
//! - `menus` - workspace/filter/sort menu popups
//! - `status` - header, status bar, notice and help popups

pub mod icons;
pub mod layout;
mod cards;
mod login;
mod menus;
mod status;

use crate::tui::{App, ModalState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function - renders the entire TUI.
pub fn draw(f: &mut Frame, app: &App) {
    if !app.authenticated {
        login::draw_login(f, app);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Card grid
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        status::draw_header(f, app, chunks[0]);
        cards::draw_task_grid(f, app, chunks[1]);
        status::draw_status_bar(f, app, chunks[2]);

        // Overlays
        match app.modal {
            ModalState::WorkspaceMenu => menus::draw_workspace_menu(f, app),
            ModalState::AssigneeMenu => menus::draw_assignee_menu(f, app),
            ModalState::StatusMenu => menus::draw_status_menu(f, app),
            ModalState::TypeMenu => menus::draw_type_menu(f, app),
            ModalState::SortMenu => menus::draw_sort_menu(f, app),
            ModalState::Help => status::draw_help_popup(f),
            ModalState::None => {}
        }
    }

    if app.notice.is_some() {
        status::draw_notice(f, app);
    }
}
