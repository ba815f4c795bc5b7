use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppMode, AppState};

/// Render the status bar at the top of the screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::Blue));

    let mode_str = match state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Search => "SEARCH",
        AppMode::Insert => "INSERT",
        AppMode::Dialog => "DIALOG",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Taskboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Mode: {}", mode_str),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Today: {}", state.today.format("%a %Y-%m-%d")),
            Style::default().fg(Color::Green),
        ),
    ])];

    if let Some(ref message) = state.status_message {
        let (label, color) = if message.is_error {
            ("Error: ", Color::Red)
        } else {
            ("Status: ", Color::Blue)
        };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(color)),
            Span::styled(message.text.clone(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
