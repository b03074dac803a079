//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::models::Side;
use crate::view_model::{ImpactTier, StatKind};
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresher => Color::Cyan,
        Source::Chart => Color::Yellow,
        Source::Dashboard => Color::Green,
    }
}

/// Color and icon for a calendar impact tier.
pub fn impact_style(tier: ImpactTier) -> (Color, &'static str) {
    match tier {
        ImpactTier::High => (Color::Red, "▲"),
        ImpactTier::Medium => (Color::Yellow, "◆"),
        ImpactTier::Low => (Color::Blue, "▬"),
        ImpactTier::Unclassified => (Color::Gray, "●"),
    }
}

pub fn stat_color(kind: StatKind) -> Color {
    match kind {
        StatKind::Total => Color::Blue,
        StatKind::Buy => Color::Green,
        StatKind::Sell => Color::Red,
        StatKind::Symbols => Color::Magenta,
    }
}

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Buy => Color::Green,
        Side::Sell => Color::Red,
    }
}

/// `2d 3h 4m`, `3h 4m 5s` or `4m 5s`
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let Some(month_day) = date_part.get(5..10) {
            return format!("{} {}", month_day, time_part);
        }
    }
    // Unrecognized shape, show as-is
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose transport errors with a short description
    let Some(index) = msg.find("Reqwest error: ") else {
        return msg.to_string();
    };
    let prefix = &msg[..index];
    let detail = if msg.contains("timed out") {
        "Request timed out"
    } else if msg.contains("error sending request") || msg.contains("connect") {
        "Backend unreachable"
    } else {
        "Network error"
    };
    format!("{}{} - retrying next cycle", prefix, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-11-06 14:30:05"),
            "11-06 14:30:05"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 61)), "3h 1m 1s");
        assert_eq!(format_uptime(Duration::from_secs(2 * 86400 + 3600)), "2d 1h 0m");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Refresh #3 failed: Reqwest error: error sending request for url (http://localhost:8000/api/stats)"
            ),
            "Refresh #3 failed: Backend unreachable - retrying next cycle"
        );
        assert_eq!(
            clean_http_error_message("Refresh #3 failed: HTTP error with status 500: boom"),
            "Refresh #3 failed: HTTP error with status 500: boom"
        );
    }

    #[test]
    fn test_unknown_impact_is_neutral() {
        assert_eq!(impact_style(ImpactTier::Unclassified).0, Color::Gray);
        assert_eq!(impact_style(ImpactTier::High).0, Color::Red);
    }
}
