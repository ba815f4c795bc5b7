use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "Move selection down"),
            ("k / ↑", "Move selection up"),
            ("g / G", "Jump to first / last task"),
            ("Enter", "Open task details"),
        ],
    ),
    (
        "Tasks",
        &[
            ("n", "Create new task"),
            ("e", "Edit selected task"),
            ("d", "Delete selected task"),
            ("x", "Cycle status: Inbox → Doing → Waiting → Done"),
        ],
    ),
    (
        "Views",
        &[
            ("1-6", "All, Quick Wins, Critical, Due Soon, Waiting, Done"),
            ("/", "Search titles (Enter or Esc to leave)"),
            ("Esc", "Clear search"),
            ("s", "Sort by column (again to flip direction)"),
            ("f", "Filter by status"),
            ("a", "Filter by area"),
            ("h", "Hide or show done tasks"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")],
    ),
];

/// Render the help overlay showing all keyboard shortcuts
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut content = vec![Line::from("")];
    for (heading, keys) in SECTIONS {
        content.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *keys {
            content.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Cyan)),
                Span::raw(*description),
            ]));
        }
        content.push(Line::from(""));
    }
    content.push(Line::from(Span::styled(
        "Press ? or Esc to close...",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
