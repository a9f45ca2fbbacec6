//! Status icons for task cards.

use ratatui::style::Color;

pub const STATUS_DONE: &str = "✓";
pub const STATUS_IN_PROGRESS: &str = "◷";
pub const STATUS_BLOCKED: &str = "!";
pub const STATUS_DEFAULT: &str = "≡";

/// Icon and color for a status string, matching common ClickUp status
/// names case-insensitively.
pub fn status_icon(status: Option<&str>) -> (&'static str, Color) {
    match status.map(|s| s.to_lowercase()).as_deref() {
        Some("done") | Some("complete") => (STATUS_DONE, Color::Green),
        Some("in progress") | Some("doing") => (STATUS_IN_PROGRESS, Color::Yellow),
        Some("blocked") | Some("urgent") => (STATUS_BLOCKED, Color::Red),
        _ => (STATUS_DEFAULT, Color::DarkGray),
    }
}
