/*
[INPUT]:  AppState visible tasks, sort state and selection
[OUTPUT]: Sortable task table rendered into the frame
[POS]:    TUI main pane
[UPDATE]: When table columns or row styling change
*/

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use taskboard_core::{SortKey, SortState, Task, days_left, level, score};

use crate::app::state::AppState;
use crate::ui::components::format::{days_left_label, days_left_style, level_style, truncate};

/// Sortable columns in display order; Title takes the remaining width
const COLUMNS: [(SortKey, u16); 10] = [
    (SortKey::Title, 0),
    (SortKey::Area, 9),
    (SortKey::Type, 9),
    (SortKey::Origin, 8),
    (SortKey::Impact, 7),
    (SortKey::Urgency, 8),
    (SortKey::Effort, 7),
    (SortKey::DaysLeft, 10),
    (SortKey::Status, 8),
    (SortKey::Score, 7),
];
const LEVEL_WIDTH: u16 = 8;
const MIN_TITLE_WIDTH: u16 = 16;

fn header_label(sort: &SortState, key: SortKey) -> String {
    match sort.indicator(key) {
        Some(arrow) => format!("{}{arrow}", key.label()),
        None => key.label().to_string(),
    }
}

fn row<'a>(task: &'a Task, state: &AppState, title_width: usize) -> Row<'a> {
    let days = days_left(task, state.today);
    let level = level(task, state.today);
    Row::new(vec![
        Cell::from(truncate(&task.title, title_width)),
        Cell::from(task.area.label()),
        Cell::from(task.kind.label()),
        Cell::from(task.origin.label()),
        Cell::from(task.impact.to_string()),
        Cell::from(task.urgency.to_string()),
        Cell::from(task.effort.label()),
        Cell::from(Span::styled(days_left_label(days), days_left_style(days))),
        Cell::from(task.status.label()),
        Cell::from(score(task, state.today).to_string()),
        Cell::from(Span::styled(level.label(), level_style(level))),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tasks = state.visible_tasks();
    let fixed: u16 = COLUMNS.iter().map(|(_, width)| *width).sum::<u16>() + LEVEL_WIDTH;
    let title_width = area
        .width
        .saturating_sub(fixed + COLUMNS.len() as u16 + 4)
        .max(MIN_TITLE_WIDTH);

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut header: Vec<Cell> = COLUMNS
        .iter()
        .map(|(key, _)| Cell::from(header_label(&state.sort, *key)))
        .collect();
    header.push(Cell::from("Level"));

    let mut widths: Vec<Constraint> = COLUMNS
        .iter()
        .map(|(key, width)| match key {
            SortKey::Title => Constraint::Min(MIN_TITLE_WIDTH),
            _ => Constraint::Length(*width),
        })
        .collect();
    widths.push(Constraint::Length(LEVEL_WIDTH));

    let rows: Vec<Row> = if tasks.is_empty() {
        let hint = if state.store.tasks().is_empty() {
            "No tasks yet - press n to create one"
        } else {
            "No tasks match the current filters"
        };
        vec![Row::new(vec![Cell::from(hint)])]
    } else {
        tasks
            .iter()
            .map(|task| row(task, state, usize::from(title_width)))
            .collect()
    };

    let title = format!(" Tasks ({}/{}) ", tasks.len(), state.store.tasks().len());
    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !tasks.is_empty() {
        table_state.select(Some(state.selected_index));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}
