/// **Input**: Task store, key events, periodic ticks.
/// **Output**: Mutated AppState for UI rendering and persisted task changes.
/// **Position**: TUI application state and input-handling coordinator.
/// **Update**: Revisit when keybindings, modals or view controls change.
use std::fmt;

use chrono::NaiveDate;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};
use tui_input::Input;

use taskboard_core::view::{self, SortState, ViewOptions};
use taskboard_core::{
    Area, KeyValueStore, QuickFilter, SortKey, Status, StoreError, Task, TaskStore, scoring,
};

use crate::ui::components::single_select::SingleSelect;
use crate::ui::components::task_form::{FormAction, TaskForm, text_request};

/// Task store as used by the dashboard; the backend is chosen at startup
pub type Store = TaskStore<Box<dyn KeyValueStore + Send>>;

/// Ticks (250ms each) a status message stays visible
pub const STATUS_TICKS: u8 = 16;

/// Application mode - determines how keyboard input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - single-key commands
    Normal,
    /// Typing into the search box
    Search,
    /// Typing into the task form
    Insert,
    /// A non-form modal is open
    Dialog,
}

/// Status or area filter choice; `Any` disables the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice<T> {
    Any,
    Only(T),
}

impl<T: Copy> FilterChoice<T> {
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(FilterChoice::Any, FilterChoice::Only)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FilterChoice::Any => None,
            FilterChoice::Only(value) => Some(value),
        }
    }

    fn options(all: &[T]) -> Vec<Self> {
        std::iter::once(FilterChoice::Any)
            .chain(all.iter().copied().map(FilterChoice::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for FilterChoice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::Any => f.write_str("Any"),
            FilterChoice::Only(value) => value.fmt(f),
        }
    }
}

/// Confirmation actions that can be triggered from dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { task_id: String },
}

/// Modal types that can be displayed
#[derive(Debug, Clone)]
pub enum ModalType {
    Help,
    /// Read-only view of one task
    Detail { task_id: String },
    Confirm {
        title: String,
        message: String,
        action: ConfirmAction,
    },
    /// Create (`editing: None`) or edit form
    TaskForm {
        form: Box<TaskForm>,
        editing: Option<String>,
    },
    SortSelect(SingleSelect<SortKey>),
    StatusFilter(SingleSelect<FilterChoice<Status>>),
    AreaFilter(SingleSelect<FilterChoice<Area>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub ticks_left: u8,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub view: ViewOptions,
    pub sort: SortState,
    /// Current input mode
    pub mode: AppMode,
    /// Index into the visible (filtered and sorted) list
    pub selected_index: usize,
    pub modal: Option<ModalType>,
    /// Search box contents; mirrored into `view.search`
    pub search: Input,
    pub status_message: Option<StatusMessage>,
    /// Date used for scoring, refreshed on every tick
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: Store, hide_done: bool) -> Self {
        Self {
            store,
            view: ViewOptions {
                hide_done,
                ..ViewOptions::default()
            },
            sort: SortState::default(),
            mode: AppMode::Normal,
            selected_index: 0,
            modal: None,
            search: Input::default(),
            status_message: Some(StatusMessage {
                text: "Press ? for help".to_string(),
                is_error: false,
                ticks_left: STATUS_TICKS,
            }),
            today: scoring::today(),
            should_quit: false,
        }
    }

    /// Current filtered and sorted task list
    pub fn visible_tasks(&self) -> Vec<&Task> {
        view::apply(self.store.tasks(), &self.view, &self.sort, self.today)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_task().map(|task| task.id().to_string())
    }

    pub fn update_tick(&mut self) {
        self.today = scoring::today();
        if let Some(message) = self.status_message.as_mut() {
            if message.ticks_left > 0 {
                message.ticks_left -= 1;
            } else {
                self.status_message = None;
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            ticks_left: STATUS_TICKS,
        });
    }

    fn set_error(&mut self, context: &str, err: StoreError) {
        warn!(error = %err, "{context}");
        self.status_message = Some(StatusMessage {
            text: format!("{context}: {err}"),
            is_error: true,
            ticks_left: STATUS_TICKS * 2,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Search => self.handle_search_mode(key),
            AppMode::Insert => self.handle_insert_mode(key),
            AppMode::Dialog => self.handle_dialog_mode(key),
        }
        self.clamp_selection();
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        use KeyCode::*;

        match key.code {
            Char('q') => self.should_quit = true,
            Char('j') | Down => self.next_item(),
            Char('k') | Up => self.previous_item(),
            Char('g') | Home => self.selected_index = 0,
            Char('G') | End => self.selected_index = self.visible_tasks().len().saturating_sub(1),
            Char('n') => self.open_create_form(),
            Char('/') => self.mode = AppMode::Search,
            Enter => self.open_detail(),
            Char('e') => self.open_edit_form(),
            Char('d') => self.confirm_delete(),
            Char('x') => self.cycle_status(),
            Char('s') => {
                let current = self.sort.key.unwrap_or(SortKey::Score);
                let select = SingleSelect::new("Sort by", SortKey::ALL.to_vec()).with_current(&current);
                self.open_modal(ModalType::SortSelect(select));
            }
            Char('f') => {
                let select = SingleSelect::new("Status filter", FilterChoice::options(Status::ALL))
                    .with_current(&FilterChoice::from_option(self.view.status));
                self.open_modal(ModalType::StatusFilter(select));
            }
            Char('a') => {
                let select = SingleSelect::new("Area filter", FilterChoice::options(Area::ALL))
                    .with_current(&FilterChoice::from_option(self.view.area));
                self.open_modal(ModalType::AreaFilter(select));
            }
            Char('h') => {
                self.view.hide_done = !self.view.hide_done;
                let state = if self.view.hide_done { "hidden" } else { "shown" };
                self.set_status(format!("Done tasks {state}"));
            }
            Char('?') => self.open_modal(ModalType::Help),
            Char(ch @ '1'..='6') => {
                let index = ch as usize - '1' as usize;
                if let Some(quick) = QuickFilter::ALL.get(index) {
                    self.view.quick = *quick;
                    self.selected_index = 0;
                }
            }
            Esc if !self.view.search.is_empty() => {
                self.search = Input::default();
                self.view.search.clear();
            }
            _ => {}
        }
    }

    fn handle_search_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = AppMode::Normal,
            _ => {
                if let Some(request) = text_request(key) {
                    self.search.handle(request);
                    self.view.search = self.search.value().to_string();
                    self.selected_index = 0;
                }
            }
        }
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) {
        let Some(ModalType::TaskForm { form, .. }) = self.modal.as_mut() else {
            self.close_modal();
            return;
        };

        match form.handle_key(key) {
            FormAction::None => {}
            FormAction::Cancel => self.close_modal(),
            FormAction::Submit => self.submit_form(),
        }
    }

    fn handle_dialog_mode(&mut self, key: KeyEvent) {
        let Some(modal) = self.modal.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match modal {
            ModalType::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.close_modal();
                }
            }
            ModalType::Detail { task_id } => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_modal(),
                KeyCode::Char('e') => {
                    let task_id = task_id.clone();
                    self.close_modal();
                    self.open_edit_form_for(&task_id);
                }
                _ => {}
            },
            ModalType::Confirm { .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.close_dialog(true),
                KeyCode::Char('n') | KeyCode::Esc => self.close_dialog(false),
                _ => {}
            },
            ModalType::SortSelect(select) => {
                if key.code == KeyCode::Esc {
                    self.close_modal();
                } else if let Some(sort_key) = select.handle_key(key) {
                    self.close_modal();
                    self.sort.select(sort_key);
                    self.selected_index = 0;
                }
            }
            ModalType::StatusFilter(select) => {
                if key.code == KeyCode::Esc {
                    self.close_modal();
                } else if let Some(choice) = select.handle_key(key) {
                    self.close_modal();
                    self.view.status = choice.into_option();
                    self.selected_index = 0;
                }
            }
            ModalType::AreaFilter(select) => {
                if key.code == KeyCode::Esc {
                    self.close_modal();
                } else if let Some(choice) = select.handle_key(key) {
                    self.close_modal();
                    self.view.area = choice.into_option();
                    self.selected_index = 0;
                }
            }
            ModalType::TaskForm { .. } => self.mode = AppMode::Insert,
        }
    }

    fn open_modal(&mut self, modal: ModalType) {
        self.mode = match modal {
            ModalType::TaskForm { .. } => AppMode::Insert,
            _ => AppMode::Dialog,
        };
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.mode = AppMode::Normal;
    }

    fn next_item(&mut self) {
        let count = self.visible_tasks().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn previous_item(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    fn select_task(&mut self, task_id: &str) {
        if let Some(index) = self
            .visible_tasks()
            .iter()
            .position(|task| task.id() == task_id)
        {
            self.selected_index = index;
        }
    }

    fn open_create_form(&mut self) {
        self.open_modal(ModalType::TaskForm {
            form: Box::new(TaskForm::new()),
            editing: None,
        });
    }

    fn open_edit_form(&mut self) {
        match self.selected_id() {
            Some(task_id) => self.open_edit_form_for(&task_id),
            None => self.set_status("No task selected"),
        }
    }

    fn open_edit_form_for(&mut self, task_id: &str) {
        let Some(task) = self.store.get(task_id) else {
            self.set_status("Task no longer exists");
            return;
        };
        let form = TaskForm::from_draft(task.to_draft());
        self.open_modal(ModalType::TaskForm {
            form: Box::new(form),
            editing: Some(task_id.to_string()),
        });
    }

    fn open_detail(&mut self) {
        if let Some(task_id) = self.selected_id() {
            self.open_modal(ModalType::Detail { task_id });
        }
    }

    fn confirm_delete(&mut self) {
        let Some(task) = self.selected_task() else {
            self.set_status("No task selected");
            return;
        };
        let modal = ModalType::Confirm {
            title: "Delete Task".to_string(),
            message: format!("Delete task '{}'", task.title),
            action: ConfirmAction::DeleteTask {
                task_id: task.id().to_string(),
            },
        };
        self.open_modal(modal);
    }

    fn cycle_status(&mut self) {
        let Some((task_id, status)) = self
            .selected_task()
            .map(|task| (task.id().to_string(), task.status.next()))
        else {
            return;
        };

        match self.store.set_status(&task_id, status) {
            Ok(_) => {
                self.set_status(format!("Status set to {status}"));
                self.select_task(&task_id);
            }
            Err(err) => self.set_error("Failed to save status", err),
        }
    }

    fn submit_form(&mut self) {
        let Some(ModalType::TaskForm { form, editing }) = self.modal.as_mut() else {
            return;
        };

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                form.error_message = Some(message);
                return;
            }
        };
        if !draft.has_title() {
            debug!("ignoring form submission without a title");
            return;
        }

        let editing = editing.clone();
        self.close_modal();

        match editing {
            None => match self.store.create(draft) {
                Ok(Some(task)) => {
                    let task_id = task.id().to_string();
                    self.set_status("Task created");
                    self.select_task(&task_id);
                }
                Ok(None) => {}
                Err(err) => self.set_error("Failed to save task", err),
            },
            Some(task_id) => match self.store.update(&task_id, draft) {
                Ok(true) => {
                    self.set_status("Task updated");
                    self.select_task(&task_id);
                }
                Ok(false) => self.set_status("Task no longer exists"),
                Err(err) => self.set_error("Failed to save task", err),
            },
        }
    }

    /// Close the confirmation dialog, running its action when confirmed
    pub fn close_dialog(&mut self, confirmed: bool) {
        let action = match self.modal.take() {
            Some(ModalType::Confirm { action, .. }) => Some(action),
            _ => None,
        };
        self.close_modal();

        if !confirmed {
            return;
        }
        match action {
            Some(ConfirmAction::DeleteTask { task_id }) => match self.store.delete(&task_id) {
                Ok(true) => self.set_status("Task deleted"),
                Ok(false) => self.set_status("Task no longer exists"),
                Err(err) => self.set_error("Failed to delete task", err),
            },
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};
    use taskboard_core::{MemoryStore, TaskDraft};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(state: &mut AppState, codes: &[KeyCode]) {
        for code in codes {
            state.handle_key(key(*code));
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            state.handle_key(key(KeyCode::Char(ch)));
        }
    }

    fn state_with(titles: &[&str]) -> AppState {
        let backend: Box<dyn KeyValueStore + Send> = Box::new(MemoryStore::new());
        let mut store = TaskStore::load(backend);
        for title in titles {
            store.create(TaskDraft::new(*title)).unwrap();
        }
        AppState::new(store, false)
    }

    #[test]
    fn test_n_opens_create_form() {
        let mut state = state_with(&[]);
        press(&mut state, &[KeyCode::Char('n')]);

        assert_eq!(state.mode, AppMode::Insert);
        assert!(matches!(
            state.modal,
            Some(ModalType::TaskForm { editing: None, .. })
        ));
    }

    #[test]
    fn test_n_in_search_box_is_text() {
        let mut state = state_with(&["alpha", "banana"]);
        press(&mut state, &[KeyCode::Char('/')]);
        type_text(&mut state, "an");

        assert_eq!(state.mode, AppMode::Search);
        assert!(state.modal.is_none());
        assert_eq!(state.view.search, "an");
        assert_eq!(state.visible_tasks().len(), 1);

        press(&mut state, &[KeyCode::Enter, KeyCode::Char('n')]);
        assert_eq!(state.mode, AppMode::Insert);
    }

    #[test]
    fn test_create_through_form() {
        let mut state = state_with(&[]);
        press(&mut state, &[KeyCode::Char('n')]);
        type_text(&mut state, "write tests");
        press(&mut state, &[KeyCode::Enter]);

        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.modal.is_none());
        assert_eq!(state.store.tasks().len(), 1);
        assert_eq!(state.store.tasks()[0].title, "write tests");
    }

    #[test]
    fn test_blank_title_submit_is_a_no_op() {
        let mut state = state_with(&[]);
        press(&mut state, &[KeyCode::Char('n')]);
        type_text(&mut state, "   ");
        press(&mut state, &[KeyCode::Enter]);

        assert!(state.store.tasks().is_empty());
        assert_eq!(state.mode, AppMode::Insert);
    }

    #[test]
    fn test_esc_closes_modals() {
        let mut state = state_with(&["one"]);
        for open in ['n', '?', 's', 'f', 'a', 'd'] {
            press(&mut state, &[KeyCode::Char(open)]);
            assert!(state.modal.is_some(), "'{open}' should open a modal");
            press(&mut state, &[KeyCode::Esc]);
            assert!(state.modal.is_none(), "Esc should close '{open}'");
            assert_eq!(state.mode, AppMode::Normal);
        }
        press(&mut state, &[KeyCode::Enter, KeyCode::Esc]);
        assert!(state.modal.is_none());
        assert_eq!(state.store.tasks().len(), 1);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = state_with(&["keep", "drop"]);
        let doomed = state.selected_task().unwrap().id().to_string();

        press(&mut state, &[KeyCode::Char('d'), KeyCode::Char('n')]);
        assert_eq!(state.store.tasks().len(), 2);

        press(&mut state, &[KeyCode::Char('d'), KeyCode::Char('y')]);
        assert_eq!(state.store.tasks().len(), 1);
        assert!(state.store.get(&doomed).is_none());
    }

    #[test]
    fn test_edit_keeps_identity() {
        let mut state = state_with(&["draft"]);
        let original = state.store.tasks()[0].clone();

        press(&mut state, &[KeyCode::Char('e'), KeyCode::End]);
        type_text(&mut state, " v2");
        press(&mut state, &[KeyCode::Enter]);

        let edited = &state.store.tasks()[0];
        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.created_at(), original.created_at());
        assert_eq!(edited.title, "draft v2");
    }

    #[test]
    fn test_x_cycles_status() {
        let mut state = state_with(&["call"]);
        press(&mut state, &[KeyCode::Char('x')]);
        assert_eq!(state.store.tasks()[0].status, Status::Doing);
        press(&mut state, &[KeyCode::Char('x'), KeyCode::Char('x')]);
        assert_eq!(state.store.tasks()[0].status, Status::Done);
    }

    #[test]
    fn test_sort_select_toggles_direction() {
        let mut state = state_with(&["a"]);
        // Cursor starts on Score when nothing is selected yet
        press(&mut state, &[KeyCode::Char('s'), KeyCode::Enter]);
        assert_eq!(state.sort.key, Some(SortKey::Score));
        press(&mut state, &[KeyCode::Char('s'), KeyCode::Enter]);
        assert_eq!(state.sort.indicator(SortKey::Score), Some("▲"));
    }

    #[test]
    fn test_quick_filter_and_hide_done_keys() {
        let mut state = state_with(&["a", "b"]);
        press(&mut state, &[KeyCode::Char('x'), KeyCode::Char('x'), KeyCode::Char('x')]);
        press(&mut state, &[KeyCode::Char('6')]);
        assert_eq!(state.view.quick, QuickFilter::Done);
        assert_eq!(state.visible_tasks().len(), 1);

        press(&mut state, &[KeyCode::Char('h')]);
        assert!(state.visible_tasks().is_empty());
        press(&mut state, &[KeyCode::Char('1'), KeyCode::Char('h')]);
        assert_eq!(state.visible_tasks().len(), 2);
    }

    #[test]
    fn test_status_filter_popup() {
        let mut state = state_with(&["a", "b"]);
        press(&mut state, &[KeyCode::Char('x')]);
        // Any, Inbox, Doing
        press(
            &mut state,
            &[KeyCode::Char('f'), KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        );
        assert_eq!(state.view.status, Some(Status::Doing));
        assert_eq!(state.visible_tasks().len(), 1);
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = state_with(&[]);
        state.set_status("hello");
        for _ in 0..=STATUS_TICKS {
            state.update_tick();
        }
        assert!(state.status_message.is_none());
    }
}
