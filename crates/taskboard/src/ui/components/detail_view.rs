use chrono::{Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use taskboard_core::{Task, days_left, level, score};

use crate::ui::centered_rect;
use crate::ui::components::format::{days_left_label, level_style};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label:<12}"), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Render the read-only detail modal for one task
pub fn render(frame: &mut Frame, area: Rect, task: Option<&Task>, today: NaiveDate) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Task Detail ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(task) = task else {
        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("❌ ", Style::default().fg(Color::Red)),
                Span::styled("Task not found", Style::default().fg(Color::Red)),
            ]),
        ];
        frame.render_widget(Paragraph::new(content).block(block), popup_area);
        return;
    };

    let level = level(task, today);
    let days = days_left(task, today);
    let deadline = match task.deadline {
        Some(date) => format!("{date} ({})", days_left_label(days)),
        None => "-".to_string(),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", task.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Status", task.status.to_string()),
        field("Area", task.area.to_string()),
        field("Type", task.kind.to_string()),
        field("Origin", task.origin.to_string()),
        field("Impact", task.impact.to_string()),
        field("Urgency", task.urgency.to_string()),
        field("Effort", task.effort.to_string()),
        field("Deadline", deadline),
        Line::from(vec![
            Span::styled(format!(" {:<12}", "Score"), Style::default().fg(Color::Gray)),
            Span::raw(format!("{} ", score(task, today))),
            Span::styled(level.label(), level_style(level)),
        ]),
        field(
            "Created",
            task.created_at()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        ),
        field("Id", task.id().to_string()),
        Line::from(""),
    ];

    if let Some(description) = &task.description {
        content.push(Line::from(Span::styled(
            " Description",
            Style::default().fg(Color::Gray),
        )));
        content.extend(description.lines().map(|line| Line::from(format!(" {line}"))));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![
        Span::styled(" e ", Style::default().fg(Color::Cyan)),
        Span::styled("edit  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("close", Style::default().fg(Color::Gray)),
    ]));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
