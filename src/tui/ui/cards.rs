//! The responsive task card grid.
//!
//! Columns scale with terminal width (capped at three); each card shows
//! the task name, status, URL, and assignee badges colored by the
//! deterministic id hash.

use super::icons::status_icon;
use super::layout::{hex_to_color, truncate_to_width};
use crate::data::color::color_from_id;
use crate::data::Task;
use crate::tui::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 7;

pub fn draw_task_grid(f: &mut Frame, app: &App, area: Rect) {
    if app.selected_workspace.is_none() {
        return draw_empty_state(f, area, "No workspace selected — press w to choose one");
    }

    if app.is_loading && app.tasks.is_empty() {
        return draw_empty_state(f, area, "Loading tasks...");
    }

    let visible = app.visible_tasks();
    if visible.is_empty() {
        return draw_empty_state(f, area, "No tasks found.");
    }

    let columns = app.grid_columns.max(1);
    let cell_width = area.width / columns as u16;
    if cell_width == 0 || area.height == 0 {
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1).min(
        (visible.len().div_ceil(columns)).saturating_sub(visible_rows),
    );

    for row in 0..visible_rows {
        for col in 0..columns {
            let grid_idx = (first_row + row) * columns + col;
            let Some(&task_idx) = visible.get(grid_idx) else {
                return;
            };

            let y = area.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height < 3 {
                return;
            }
            let rect = Rect {
                x: area.x + col as u16 * cell_width,
                y,
                width: cell_width,
                height,
            };

            draw_card(f, &app.tasks[task_idx], grid_idx == app.selected, rect);
        }
    }
}

fn draw_card(f: &mut Frame, task: &Task, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let title = truncate_to_width(&task.name, inner_width);

    let status_text = task.status.as_ref().map(|s| s.status.as_str());
    let (icon, icon_color) = status_icon(status_text);
    let status_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::raw(" "),
        Span::raw(status_text.unwrap_or("No status").to_string()),
    ]);

    let url_line = Line::from(Span::styled(
        truncate_to_width(&task.url, inner_width),
        Style::default().fg(Color::DarkGray),
    ));

    let assignee_line = if task.assignees.is_empty() {
        Line::from(Span::styled(
            "No assignee",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = Vec::new();
        for assignee in &task.assignees {
            let color = hex_to_color(&color_from_id(&assignee.id));
            spans.push(Span::styled("● ", Style::default().fg(color)));
        }
        let names = task
            .assignees
            .iter()
            .map(|a| a.username.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        spans.push(Span::raw(truncate_to_width(
            &names,
            inner_width.saturating_sub(task.assignees.len() * 2),
        )));
        Line::from(spans)
    };

    let mut lines = vec![status_line, url_line, Line::from(""), assignee_line];
    lines.truncate(area.height.saturating_sub(2) as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_empty_state(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);

    let rect = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    f.render_widget(paragraph, rect);
}
