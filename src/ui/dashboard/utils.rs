//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::tables::OrderStatus;
use ratatui::prelude::Color;
use std::str::FromStr;

pub const ACCENT: Color = Color::Rgb(16, 185, 129);
pub const MUTED: Color = Color::Rgb(156, 163, 175);

/// Get a ratatui color for an activity source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Navigation => Color::Cyan,
        Source::Layout => Color::LightBlue,
        Source::Charts => Color::Yellow,
        Source::Tables => Color::Green,
        Source::LiveData => Color::Magenta,
        Source::System => Color::Gray,
    }
}

pub fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Rgb(245, 158, 11),
        OrderStatus::Processing => Color::Rgb(59, 130, 246),
        OrderStatus::Completed => ACCENT,
        OrderStatus::Cancelled => Color::Rgb(239, 68, 68),
    }
}

/// Parses `#rrggbb` and `rgba(r, g, b, a)` colours. Alpha is dropped.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(inner) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    Color::from_str(value).ok()
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        // "YYYY-MM-DD HH:MM:SS" -> "DD/MM HH:MM"
        if let (Some(month), Some(day), Some(hour_min)) =
            (date_part.get(5..7), date_part.get(8..10), time_part.get(0..5))
        {
            return format!("{}/{} {}", day, month, hour_min);
        }
    }
    timestamp.to_string()
}

/// Cuts `text` to at most `width` characters, ending with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgba() {
        assert_eq!(parse_css_color("#10b981"), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(
            parse_css_color("rgba(245, 158, 11, 0.7)"),
            Some(Color::Rgb(245, 158, 11))
        );
        assert_eq!(parse_css_color("rgba(300, 0, 0, 1)"), None);
        assert_eq!(parse_css_color("tomato-ish"), None);
    }

    #[test]
    fn compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-09-05 14:32:10"), "05/09 14:32");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn truncation_keeps_short_text() {
        assert_eq!(truncate("Bonés", 10), "Bonés");
        assert_eq!(truncate("Camisas de Time", 8), "Camisas…");
    }
}
