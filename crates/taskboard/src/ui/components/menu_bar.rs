use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::state::{AppMode, AppState};

fn menu_items(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Normal => &[
            ("?", "Help"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("x", "Status"),
            ("/", "Search"),
            ("s", "Sort"),
            ("f/a", "Filter"),
            ("h", "Hide done"),
            ("q", "Quit"),
        ],
        AppMode::Search => &[("Enter/Esc", "Done"), ("Ctrl+U", "Clear")],
        AppMode::Insert => &[
            ("Tab", "Next field"),
            ("←→", "Change"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        AppMode::Dialog => &[("j/k", "Move"), ("Enter", "Select"), ("Esc", "Close")],
    }
}

/// Render the menu bar at the bottom of the screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![];

    for (i, (key, desc)) in menu_items(state.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
