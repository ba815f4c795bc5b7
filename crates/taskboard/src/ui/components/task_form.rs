/// **Input**: `TaskDraft` seed values, key events, ratatui layout/style primitives.
/// **Output**: `TaskForm` state, parsed drafts and the create/edit dialog rendering.
/// **Position**: TUI component for the task create/edit modal.
/// **Update**: Revisit when task fields or validation rules change.
use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tui_input::{Input, InputRequest};

use taskboard_core::types::models::{SCALE_MAX, SCALE_MIN};
use taskboard_core::{Area, Effort, Origin, Status, TaskDraft, TaskType};

use crate::ui::centered_rect;

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Area,
    Type,
    Origin,
    Impact,
    Urgency,
    Effort,
    Deadline,
    Status,
}

impl TaskField {
    pub const ALL: [TaskField; 10] = [
        TaskField::Title,
        TaskField::Description,
        TaskField::Area,
        TaskField::Type,
        TaskField::Origin,
        TaskField::Impact,
        TaskField::Urgency,
        TaskField::Effort,
        TaskField::Deadline,
        TaskField::Status,
    ];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            TaskField::Title | TaskField::Description | TaskField::Deadline
        )
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    fn label(self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Description => "Description",
            TaskField::Area => "Area",
            TaskField::Type => "Type",
            TaskField::Origin => "Origin",
            TaskField::Impact => "Impact",
            TaskField::Urgency => "Urgency",
            TaskField::Effort => "Effort",
            TaskField::Deadline => "Deadline",
            TaskField::Status => "Status",
        }
    }
}

/// What the caller should do after a key reached the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Task form data for creating/editing tasks
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: Input,
    pub description: Input,
    /// Free text, parsed as `YYYY-MM-DD` on submit
    pub deadline: Input,
    pub area: Area,
    pub kind: TaskType,
    pub origin: Origin,
    pub impact: u8,
    pub urgency: u8,
    pub effort: Effort,
    pub status: Status,
    pub focused_field: TaskField,
    pub error_message: Option<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::from_draft(TaskDraft::default())
    }
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            title: Input::new(draft.title),
            description: Input::new(draft.description.unwrap_or_default()),
            deadline: Input::new(
                draft
                    .deadline
                    .map(|date| date.format(DEADLINE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            area: draft.area,
            kind: draft.kind,
            origin: draft.origin,
            impact: draft.impact,
            urgency: draft.urgency,
            effort: draft.effort,
            status: draft.status,
            focused_field: TaskField::Title,
            error_message: None,
        }
    }

    /// Parse the form into a draft; only the deadline can fail
    pub fn to_draft(&self) -> Result<TaskDraft, String> {
        let deadline = match self.deadline.value().trim() {
            "" => None,
            text => Some(
                NaiveDate::parse_from_str(text, DEADLINE_FORMAT)
                    .map_err(|_| format!("Deadline '{text}' must be YYYY-MM-DD"))?,
            ),
        };

        let description = self.description.value();
        Ok(TaskDraft {
            title: self.title.value().to_string(),
            description: (!description.trim().is_empty()).then(|| description.to_string()),
            area: self.area,
            kind: self.kind,
            origin: self.origin,
            impact: self.impact,
            urgency: self.urgency,
            effort: self.effort,
            deadline,
            status: self.status,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.focused_field = self.focused_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.focused_field = self.focused_field.prev(),
            KeyCode::Left => self.step(false),
            KeyCode::Right => self.step(true),
            _ => {
                if let Some(request) = text_request(key) {
                    self.edit_text(request, key);
                }
            }
        }
        self.error_message = None;
        FormAction::None
    }

    fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focused_field {
            TaskField::Title => Some(&mut self.title),
            TaskField::Description => Some(&mut self.description),
            TaskField::Deadline => Some(&mut self.deadline),
            _ => None,
        }
    }

    /// Left/Right: cycle enumerations, nudge scales, move the text cursor
    fn step(&mut self, forward: bool) {
        match self.focused_field {
            TaskField::Area => self.area = if forward { self.area.next() } else { self.area.prev() },
            TaskField::Type => self.kind = if forward { self.kind.next() } else { self.kind.prev() },
            TaskField::Origin => {
                self.origin = if forward { self.origin.next() } else { self.origin.prev() }
            }
            TaskField::Effort => {
                self.effort = if forward { self.effort.next() } else { self.effort.prev() }
            }
            TaskField::Status => {
                self.status = if forward { self.status.next() } else { self.status.prev() }
            }
            TaskField::Impact => self.impact = nudge(self.impact, forward),
            TaskField::Urgency => self.urgency = nudge(self.urgency, forward),
            TaskField::Title | TaskField::Description | TaskField::Deadline => {
                let request = if forward {
                    InputRequest::GoToNextChar
                } else {
                    InputRequest::GoToPrevChar
                };
                if let Some(input) = self.focused_input() {
                    input.handle(request);
                }
            }
        }
    }

    fn edit_text(&mut self, request: InputRequest, key: KeyEvent) {
        if let Some(input) = self.focused_input() {
            input.handle(request);
            return;
        }
        // Digits set a scale directly
        if let KeyCode::Char(ch) = key.code {
            if let Some(value) = ch.to_digit(10).and_then(|digit| u8::try_from(digit).ok()) {
                if (SCALE_MIN..=SCALE_MAX).contains(&value) {
                    match self.focused_field {
                        TaskField::Impact => self.impact = value,
                        TaskField::Urgency => self.urgency = value,
                        _ => {}
                    }
                }
            }
        }
    }

    fn value_text(&self, field: TaskField) -> String {
        match field {
            TaskField::Title => self.title.value().to_string(),
            TaskField::Description => self.description.value().to_string(),
            TaskField::Deadline => self.deadline.value().to_string(),
            TaskField::Area => self.area.to_string(),
            TaskField::Type => self.kind.to_string(),
            TaskField::Origin => self.origin.to_string(),
            TaskField::Impact => scale_bar(self.impact),
            TaskField::Urgency => scale_bar(self.urgency),
            TaskField::Effort => self.effort.to_string(),
            TaskField::Status => self.status.to_string(),
        }
    }

    fn input_for(&self, field: TaskField) -> Option<&Input> {
        match field {
            TaskField::Title => Some(&self.title),
            TaskField::Description => Some(&self.description),
            TaskField::Deadline => Some(&self.deadline),
            _ => None,
        }
    }
}

/// Map editing keys to tui-input requests
pub fn text_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputRequest::InsertChar(ch)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

fn nudge(value: u8, up: bool) -> u8 {
    if up {
        value.saturating_add(1).min(SCALE_MAX)
    } else {
        value.saturating_sub(1).max(SCALE_MIN)
    }
}

fn scale_bar(value: u8) -> String {
    let filled = usize::from(value);
    let empty = usize::from(SCALE_MAX).saturating_sub(filled);
    format!("{value} {}{}", "■".repeat(filled), "□".repeat(empty))
}

/// Input text with the cursor cell drawn reversed
pub fn input_spans(input: &Input, focused: bool) -> Vec<Span<'static>> {
    let value = input.value();
    if !focused {
        return vec![Span::raw(value.to_string())];
    }

    let cursor = input.cursor();
    let before: String = value.chars().take(cursor).collect();
    let at: String = value.chars().nth(cursor).map(String::from).unwrap_or_else(|| " ".into());
    let after: String = value.chars().skip(cursor + 1).collect();
    vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]
}

/// Render the task form dialog
pub fn render(frame: &mut Frame, area: Rect, form: &TaskForm, is_edit: bool) {
    let popup_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup_area);

    let title = if is_edit {
        " Edit Task "
    } else {
        " Create New Task "
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut content = vec![Line::from("")];
    for field in TaskField::ALL {
        let focused = form.focused_field == field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::styled(format!(" {:<13}", field.label()), label_style)];
        match form.input_for(field) {
            Some(input) => spans.extend(input_spans(input, focused)),
            None if focused => {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::raw(form.value_text(field)));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            }
            None => spans.push(Span::raw(form.value_text(field))),
        }
        if field == TaskField::Deadline && form.deadline.value().is_empty() && !focused {
            spans.push(Span::styled(
                "none (YYYY-MM-DD)",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        content.push(Line::from(spans));
    }
    content.push(Line::from(""));

    if let Some(ref error) = form.error_message {
        content.push(Line::from(vec![
            Span::styled(
                " Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![
        Span::styled(" Tab/↑↓ ", Style::default().fg(Color::Cyan)),
        Span::styled("switch fields  ", Style::default().fg(Color::Gray)),
        Span::styled("←→ ", Style::default().fg(Color::Cyan)),
        Span::styled("change  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::styled("save  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("cancel", Style::default().fg(Color::Gray)),
    ]));

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, popup_area);
}
