//! Workspace, filter, and sort menu popups.
//!
//! Menus are digit-indexed: only the first nine options are reachable,
//! which matches the scale of a personal workspace list.

use super::layout::{centered_rect, hex_to_color, truncate_to_width};
use crate::data::color::color_from_id;
use crate::data::SortKey;
use crate::tui::App;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 44;

fn draw_menu(f: &mut Frame, title: &str, mut lines: Vec<Line>, footer: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        footer.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    let area = centered_rect(MENU_WIDTH, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Blue));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn item_label(text: &str) -> String {
    truncate_to_width(text, MENU_WIDTH as usize - 10)
}

pub fn draw_workspace_menu(f: &mut Frame, app: &App) {
    let current = app.selected_workspace.as_ref().map(|w| w.id.as_str());
    let lines: Vec<Line> = app
        .workspaces
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, workspace)| {
            let marker = if current == Some(workspace.id.as_str()) {
                "●"
            } else {
                "○"
            };
            Line::from(format!("{}. {} {}", i + 1, marker, item_label(&workspace.name)))
        })
        .collect();

    let lines = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "No workspaces available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        lines
    };

    draw_menu(f, "Workspace", lines, "1-9 select · Esc close");
}

pub fn draw_assignee_menu(f: &mut Frame, app: &App) {
    let lines: Vec<Line> = app
        .assignee_options()
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, assignee)| {
            let checked = if app.filters.assignees.contains(&assignee.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let badge_color = hex_to_color(&color_from_id(&assignee.id));
            Line::from(vec![
                Span::raw(format!("{}. {} ", i + 1, checked)),
                Span::styled("● ", Style::default().fg(badge_color)),
                Span::raw(item_label(&assignee.username)),
            ])
        })
        .collect();

    let lines = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "No assignees in this workspace",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        lines
    };

    draw_menu(f, "Assignees", lines, "1-9 toggle · c clear · Esc close");
}

pub fn draw_status_menu(f: &mut Frame, app: &App) {
    let lines: Vec<Line> = app
        .status_options()
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, status)| {
            let checked = if app.filters.statuses.contains(status) {
                "[x]"
            } else {
                "[ ]"
            };
            Line::from(format!("{}. {} {}", i + 1, checked, item_label(status)))
        })
        .collect();

    let lines = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "No statuses in this workspace",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        lines
    };

    draw_menu(f, "Statuses", lines, "1-9 toggle · c clear · Esc close");
}

pub fn draw_type_menu(f: &mut Frame, app: &App) {
    let mut lines = vec![Line::from(format!(
        "0. {} All Types",
        radio(app.filters.task_type.is_none())
    ))];

    for (i, task_type) in app.type_options().iter().take(9).enumerate() {
        let selected = app.filters.task_type.as_deref() == Some(task_type.as_str());
        lines.push(Line::from(format!(
            "{}. {} {}",
            i + 1,
            radio(selected),
            item_label(task_type)
        )));
    }

    draw_menu(f, "Task Type", lines, "0-9 select · Esc close");
}

pub fn draw_sort_menu(f: &mut Frame, app: &App) {
    let mut lines = vec![Line::from(format!(
        "0. {} Default",
        radio(app.filters.sort.is_none())
    ))];

    for (i, sort) in SortKey::all().enumerate() {
        lines.push(Line::from(format!(
            "{}. {} {}",
            i + 1,
            radio(app.filters.sort == Some(sort)),
            sort.label()
        )));
    }

    draw_menu(f, "Sort By", lines, "0-3 select · Esc close");
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}
