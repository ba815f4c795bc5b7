/*
[INPUT]:  KeyValueStore backend and task drafts from forms or the CLI
[OUTPUT]: Canonical task list with create/update/status/delete operations
[POS]:    Storage layer - owner of the task list and its persisted blob
[UPDATE]: When task lifecycle operations or the storage key change
*/

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::store::backend::KeyValueStore;
use crate::types::{Status, Task, TaskDraft};

/// Fixed key the serialized task array lives under
pub const TASKS_KEY: &str = "taskboard.tasks";

/// Owns the task list and writes it through to a backend after every mutation.
///
/// The list is kept newest first; views sort copies of it and never reorder it.
#[derive(Debug)]
pub struct TaskStore<B: KeyValueStore> {
    backend: B,
    tasks: Vec<Task>,
}

impl<B: KeyValueStore> TaskStore<B> {
    /// Load persisted tasks; a missing or unreadable blob yields an empty list
    pub fn load(backend: B) -> Self {
        let tasks = match backend.get(TASKS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Task>>(&blob) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(error = %err, "persisted tasks are unreadable; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no persisted tasks found");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted tasks; starting empty");
                Vec::new()
            }
        };
        info!(count = tasks.len(), "tasks loaded");
        Self { backend, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Prepend a new task built from `draft`; a blank title is ignored and yields `None`
    pub fn create(&mut self, draft: TaskDraft) -> Result<Option<&Task>> {
        if !draft.has_title() {
            debug!("ignoring task draft without a title");
            return Ok(None);
        }

        let task = Task::new(draft.normalized());
        info!(task_id = %task.id(), title = %task.title, "task created");
        self.tasks.insert(0, task);
        self.persist()?;
        Ok(self.tasks.first())
    }

    /// Replace every field except identifier and creation time.
    ///
    /// Returns `false` for unknown ids and blank titles.
    pub fn update(&mut self, id: &str, draft: TaskDraft) -> Result<bool> {
        if !draft.has_title() {
            debug!(task_id = %id, "ignoring update without a title");
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            warn!(task_id = %id, "update for unknown task");
            return Ok(false);
        };

        task.apply(draft.normalized());
        info!(task_id = %id, "task updated");
        self.persist()?;
        Ok(true)
    }

    /// Inline status change
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            warn!(task_id = %id, "status change for unknown task");
            return Ok(false);
        };

        task.status = status;
        info!(task_id = %id, status = %status, "task status changed");
        self.persist()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == before {
            warn!(task_id = %id, "delete for unknown task");
            return Ok(false);
        }

        info!(task_id = %id, "task deleted");
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.tasks)?;
        self.backend.set(TASKS_KEY, &blob)?;
        debug!(count = self.tasks.len(), bytes = blob.len(), "tasks persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryStore;

    #[test]
    fn create_prepends() {
        let mut store = TaskStore::load(MemoryStore::new());
        store.create(TaskDraft::new("first")).unwrap();
        store.create(TaskDraft::new("second")).unwrap();

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn blank_title_is_a_no_op() {
        let mut store = TaskStore::load(MemoryStore::new());
        assert!(store.create(TaskDraft::new("   ")).unwrap().is_none());
        assert!(store.tasks().is_empty());
        assert_eq!(store.backend().get(TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut store = TaskStore::load(MemoryStore::new());
        assert!(!store.update("missing", TaskDraft::new("x")).unwrap());
        assert!(!store.delete("missing").unwrap());
        assert!(!store.set_status("missing", Status::Done).unwrap());
    }
}
