use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskboard_core::{level, score, summarize};

use crate::app::state::AppState;
use crate::ui::components::format::{average_label, level_style, truncate};

/// Render the insights panel; computed over every task, not the filtered view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let insights = summarize(state.store.tasks(), state.today);
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let title_width = usize::from(area.width.saturating_sub(12));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total ", Style::default().fg(Color::Gray)),
            Span::styled(insights.total.to_string(), heading),
        ]),
        Line::from(""),
        Line::from(Span::styled("Top priorities", heading)),
    ];
    if insights.top.is_empty() {
        lines.push(Line::from(Span::styled(
            " nothing yet",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    for (rank, task) in insights.top.iter().enumerate() {
        let level = level(task, state.today);
        lines.push(Line::from(vec![
            Span::raw(format!(" {}. ", rank + 1)),
            Span::styled(format!("{:>5} ", score(task, state.today)), level_style(level)),
            Span::raw(truncate(&task.title, title_width)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("By status", heading)));
    for (status, count) in &insights.by_status {
        lines.push(Line::from(format!(" {:<10}{count:>4}", status.label())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("By area", heading)));
    for (area_kind, count) in &insights.by_area {
        lines.push(Line::from(format!(" {:<10}{count:>4}", area_kind.label())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        " Avg impact  {:>4}",
        average_label(insights.avg_impact)
    )));
    lines.push(Line::from(format!(
        " Avg urgency {:>4}",
        average_label(insights.avg_urgency)
    )));

    let block = Block::default()
        .title(" Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
