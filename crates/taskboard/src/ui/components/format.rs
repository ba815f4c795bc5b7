/// **Input**: Task-derived values (levels, days left, free text).
/// **Output**: Display strings and styles shared by table, detail and insights.
/// **Position**: Formatting helpers for the TUI component layer.
use ratatui::style::{Color, Modifier, Style};
use taskboard_core::Level;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn level_style(level: Level) -> Style {
    match level {
        Level::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Level::High => Style::default().fg(Color::LightRed),
        Level::Medium => Style::default().fg(Color::Yellow),
        Level::Low => Style::default().fg(Color::Gray),
    }
}

/// "-" without a deadline, "today", "3d", or "2d late"
pub fn days_left_label(days: Option<i64>) -> String {
    match days {
        None => "-".to_string(),
        Some(0) => "today".to_string(),
        Some(days) if days < 0 => format!("{}d late", -days),
        Some(days) => format!("{days}d"),
    }
}

pub fn days_left_style(days: Option<i64>) -> Style {
    match days {
        Some(days) if days < 0 => Style::default().fg(Color::Red),
        Some(days) if days <= 3 => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

/// Cut `text` to at most `max_width` display columns, marking the cut with "…"
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width - 1 {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

pub fn average_label(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn days_left_labels() {
        assert_eq!(days_left_label(None), "-");
        assert_eq!(days_left_label(Some(0)), "today");
        assert_eq!(days_left_label(Some(4)), "4d");
        assert_eq!(days_left_label(Some(-2)), "2d late");
    }

    #[test]
    fn averages_render_one_decimal() {
        assert_eq!(average_label(None), "-");
        assert_eq!(average_label(Some(3.4)), "3.4");
    }
}
