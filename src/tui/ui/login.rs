//! Token entry form.

use super::layout::centered_rect;
use crate::tui::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_login(f: &mut Frame, app: &App) {
    let area = centered_rect(56, 16, f.area());
    f.render_widget(Clear, area);

    let masked: String = "•".repeat(app.token_input.chars().count());
    let input_line = if masked.is_empty() {
        Line::from(Span::styled(
            "Enter your ClickUp API token",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(masked),
            Span::styled("▌", Style::default().fg(Color::Blue)),
        ])
    };

    let footer = if app.is_loading {
        Line::from(Span::styled(
            format!("{} Checking...", app.spinner_char()),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Enter login · Esc quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "How to get your ClickUp API token:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  1. Log in to your ClickUp account"),
        Line::from("  2. Click your profile avatar (bottom-left)"),
        Line::from("  3. Select My Settings"),
        Line::from("  4. In the sidebar, click Apps"),
        Line::from("  5. Under \"API Token\", click Generate or Copy"),
        Line::from(""),
        input_line,
        Line::from(""),
        footer,
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Enter ClickUp API Token ")
        .border_style(Style::default().fg(Color::Blue));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
