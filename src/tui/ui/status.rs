//! Header, status bar, notice and help popups.

use super::layout::centered_rect;
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let workspace = app
        .selected_workspace
        .as_ref()
        .map(|w| w.name.as_str())
        .unwrap_or("no workspace");

    let mut spans = vec![
        Span::styled(
            " taskdeck ",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        Span::styled(workspace.to_string(), Style::default().fg(Color::White)),
    ];

    if let Some(summary) = filter_summary(app) {
        spans.push(Span::styled(
            format!("  [{}]", summary),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.is_loading {
        spans.push(Span::styled(
            format!("  {}", app.spinner_char()),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn filter_summary(app: &App) -> Option<String> {
    let mut parts = Vec::new();
    if !app.filters.assignees.is_empty() {
        parts.push(format!("{} assignees", app.filters.assignees.len()));
    }
    if !app.filters.statuses.is_empty() {
        parts.push(format!("{} statuses", app.filters.statuses.len()));
    }
    if let Some(task_type) = &app.filters.task_type {
        parts.push(format!("type {}", task_type));
    }
    if let Some(sort) = app.filters.sort {
        parts.push(format!("sort {}", sort.label().to_lowercase()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_tasks().len();
    let total = app.tasks.len();

    let mut spans = vec![Span::styled(
        " w workspace · a assignees · s statuses · t types · o sort · c clear · r refresh · ? help · q quit ",
        Style::default().fg(Color::DarkGray),
    )];

    spans.push(Span::styled(
        format!(" {}/{} tasks ", visible, total),
        Style::default().fg(Color::White),
    ));

    if let Some(refreshed) = app.last_refresh {
        spans.push(Span::styled(
            format!("updated {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn draw_notice(f: &mut Frame, app: &App) {
    let Some(message) = &app.notice else {
        return;
    };

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let width = (message.chars().count() as u16 + 6).clamp(24, f.area().width);
    let area = centered_rect(width, 5, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notice ")
        .border_style(Style::default().fg(Color::Red));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_help_popup(f: &mut Frame) {
    let lines = vec![
        Line::from("j/k/h/l or arrows  move between cards"),
        Line::from("gg / G             first / last card"),
        Line::from("Enter              open task in browser"),
        Line::from("w                  choose workspace"),
        Line::from("a / s / t          assignee / status / type filters"),
        Line::from("o                  sort order"),
        Line::from("c                  clear filters"),
        Line::from("r                  refresh tasks"),
        Line::from("L                  log out"),
        Line::from("q                  quit"),
    ];

    let area = centered_rect(52, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Blue));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
