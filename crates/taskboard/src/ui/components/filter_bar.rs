use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskboard_core::{QuickFilter, SortKey};

use crate::app::state::{AppMode, AppState};
use crate::ui::components::task_form::input_spans;

/// Render quick filters, the search box and active filter indicators
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut quick_spans = vec![Span::styled(" View: ", Style::default().fg(Color::Gray))];
    for (index, quick) in QuickFilter::ALL.iter().enumerate() {
        let style = if *quick == state.view.quick {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        quick_spans.push(Span::styled(format!(" {} {} ", index + 1, quick), style));
        quick_spans.push(Span::raw(" "));
    }

    let searching = state.mode == AppMode::Search;
    let search_label_style = if searching {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut search_spans = vec![Span::styled(" Search: ", search_label_style)];
    if state.search.value().is_empty() && !searching {
        search_spans.push(Span::styled(
            "press / to search titles",
            Style::default().add_modifier(Modifier::DIM),
        ));
    } else {
        search_spans.extend(input_spans(&state.search, searching));
    }

    let indicator = |label: &str, value: String, active: bool| {
        let style = if active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        [
            Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
            Span::styled(value, style),
        ]
    };
    let (sort_key, direction) = state.sort.effective();
    let sort_label = match state.sort.key {
        Some(_) => format!("{} {}", sort_key, direction.arrow()),
        None => format!("{} {} (default)", SortKey::Score, direction.arrow()),
    };
    search_spans.extend(indicator(
        "Status",
        state.view.status.map_or_else(|| "Any".to_string(), |s| s.to_string()),
        state.view.status.is_some(),
    ));
    search_spans.extend(indicator(
        "Area",
        state.view.area.map_or_else(|| "Any".to_string(), |a| a.to_string()),
        state.view.area.is_some(),
    ));
    search_spans.extend(indicator(
        "Done",
        if state.view.hide_done { "hidden" } else { "shown" }.to_string(),
        state.view.hide_done,
    ));
    search_spans.extend(indicator("Sort", sort_label, state.sort.key.is_some()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let paragraph = Paragraph::new(vec![Line::from(quick_spans), Line::from(search_spans)])
        .block(block);

    frame.render_widget(paragraph, area);
}
