use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::state::AppState;

pub mod components;

/// Width of the insights column on the right
const INSIGHTS_WIDTH: u16 = 36;

/// Main render function - called every frame
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let [status_area, filter_area, main_area, menu_area] = Layout::vertical([
        Constraint::Length(3), // Status bar
        Constraint::Length(4), // Quick filters and search
        Constraint::Fill(1),   // Table and insights
        Constraint::Length(1), // Menu bar
    ])
    .areas(area);

    let [table_area, insights_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(INSIGHTS_WIDTH),
    ])
    .areas(main_area);

    components::status_bar::render(frame, status_area, state);
    components::filter_bar::render(frame, filter_area, state);
    components::task_table::render(frame, table_area, state);
    components::insights::render(frame, insights_area, state);
    components::menu_bar::render(frame, menu_area, state);

    if let Some(ref modal) = state.modal {
        components::modal::render(frame, area, modal, state);
    }
}

/// Create a centered rect for popups
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
