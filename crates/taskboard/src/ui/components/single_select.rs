/// **Input**: Option list plus keyboard events for navigation/confirmation.
/// **Output**: Chosen value on confirm and a popup list rendered via ratatui.
/// **Position**: Reusable popup for sort-key, status and area selection.
/// **Update**: Revisit when selection behavior or styling changes.
use std::fmt::Display;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

#[derive(Debug, Clone)]
pub struct SingleSelect<T> {
    title: String,
    options: Vec<T>,
    cursor: usize,
    /// Option marked as currently active (e.g. the applied filter)
    current: Option<usize>,
}

impl<T> SingleSelect<T>
where
    T: Clone + Display + PartialEq,
{
    pub fn new(title: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            title: title.into(),
            options,
            cursor: 0,
            current: None,
        }
    }

    /// Mark `value` as the active option and start the cursor on it
    pub fn with_current(mut self, value: &T) -> Self {
        if let Some(index) = self.options.iter().position(|option| option == value) {
            self.cursor = index;
            self.current = Some(index);
        }
        self
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Navigate with j/k or arrows; Enter returns the option under the cursor
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<T> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.options.len().saturating_sub(1);
                None
            }
            KeyCode::Enter => self.options.get(self.cursor).cloned(),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.options.is_empty() {
            vec![ListItem::new(Line::from("No options"))]
        } else {
            self.options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let marker = if self.current == Some(index) { "● " } else { "  " };
                    ListItem::new(Line::from(format!("{marker}{option}")))
                })
                .collect()
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if !self.options.is_empty() {
            state.select(Some(self.cursor));
        }

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use taskboard_core::SortKey;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn move_down_respects_bounds() {
        let mut select = SingleSelect::new("Sort", vec!["Title", "Score", "Created"]);

        select.handle_key(key_event(KeyCode::Down));
        assert_eq!(select.cursor_index(), 1);

        select.handle_key(key_event(KeyCode::Down));
        select.handle_key(key_event(KeyCode::Down));
        assert_eq!(select.cursor_index(), 2);
    }

    #[test]
    fn move_up_respects_bounds() {
        let mut select = SingleSelect::new("Sort", vec!["Title", "Score", "Created"]);

        select.handle_key(key_event(KeyCode::Char('j')));
        select.handle_key(key_event(KeyCode::Char('k')));
        select.handle_key(key_event(KeyCode::Char('k')));
        assert_eq!(select.cursor_index(), 0);
    }

    #[test]
    fn confirm_returns_value_under_cursor() {
        let mut select =
            SingleSelect::new("Sort", SortKey::ALL.to_vec()).with_current(&SortKey::Urgency);
        assert_eq!(select.cursor_index(), 5);

        select.handle_key(key_event(KeyCode::Down));
        let chosen = select.handle_key(key_event(KeyCode::Enter));
        assert_eq!(chosen, Some(SortKey::Effort));
    }
}
