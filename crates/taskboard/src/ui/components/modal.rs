/// **Input**: ModalType variants and ratatui layout/style primitives.
/// **Output**: Modal dialog rendering via ratatui widgets.
/// **Position**: Modal rendering entrypoint in the TUI component layer.
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::state::{AppState, ModalType};
use crate::ui::centered_rect;
use crate::ui::components::{detail_view, help, task_form};

/// Render a modal dialog
pub fn render(frame: &mut Frame, area: Rect, modal: &ModalType, state: &AppState) {
    match modal {
        ModalType::Help => help::render(frame, area),
        ModalType::Detail { task_id } => {
            detail_view::render(frame, area, state.store.get(task_id), state.today);
        }
        ModalType::Confirm { title, message, .. } => {
            render_confirmation(frame, area, title, message);
        }
        ModalType::TaskForm { form, editing } => {
            task_form::render(frame, area, form, editing.is_some());
        }
        ModalType::SortSelect(select) => select.render(frame, centered_rect(30, 60, area)),
        ModalType::StatusFilter(select) => select.render(frame, centered_rect(30, 40, area)),
        ModalType::AreaFilter(select) => select.render(frame, centered_rect(30, 50, area)),
    }
}

/// Render a confirmation dialog
fn render_confirmation(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
            Span::styled(message, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  This cannot be undone.",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("    [y/Enter] ", key_style(Color::Green)),
            Span::styled("Delete  ", Style::default().fg(Color::Cyan)),
            Span::styled("[n/Esc] ", key_style(Color::Red)),
            Span::styled("Cancel", Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
