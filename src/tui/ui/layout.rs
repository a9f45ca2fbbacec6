//! Layout calculations and text utilities.

use ratatui::layout::Rect;
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A rectangle of fixed size centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(0);
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += char_width;
    }
    out.push('…');
    out
}

/// Parse a `#rrggbb` string into a terminal color; gray on bad input.
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() == 6 {
        if let Ok(rgb) = u32::from_str_radix(digits, 16) {
            return Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, (rgb & 0xff) as u8);
        }
    }
    Color::Gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_preserves_short_strings() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        let out = truncate_to_width("a long task name", 8);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 8);
    }

    #[test]
    fn hex_parsing_roundtrip() {
        assert_eq!(hex_to_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(hex_to_color("#888888"), Color::Rgb(136, 136, 136));
        assert_eq!(hex_to_color("not-a-color"), Color::Gray);
    }
}
