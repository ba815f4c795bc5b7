/*
[INPUT]:  Temporary data directories and task drafts
[OUTPUT]: Test results for task persistence
[POS]:    Integration tests - task store over the file backend
[UPDATE]: When store operations or the persisted layout change
*/

mod common;

use std::fs;

use common::in_days;
use taskboard_core::{
    Area, FileStore, KeyValueStore, MemoryStore, Status, TASKS_KEY, TaskDraft, TaskStore,
};
use tokio_test::assert_ok;

fn draft(title: &str) -> TaskDraft {
    let mut draft = TaskDraft::new(title);
    draft.area = Area::Finance;
    draft.impact = 4;
    draft.urgency = 2;
    draft.deadline = Some(in_days(5));
    draft.description = Some("quarterly".to_string());
    draft
}

#[test]
fn test_create_then_reload_reproduces_list() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(assert_ok!(FileStore::new(dir.path())));
    assert_ok!(store.create(draft("file taxes")));
    assert_ok!(store.create(TaskDraft::new("buy milk")));
    let before = store.tasks().to_vec();

    let reloaded = TaskStore::load(assert_ok!(FileStore::new(dir.path())));
    assert_eq!(reloaded.tasks(), before.as_slice());
    assert_eq!(reloaded.tasks()[0].title, "buy milk");
    assert!(dir.path().join("taskboard.tasks.json").exists());
}

#[test]
fn test_delete_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TaskStore::load(assert_ok!(FileStore::new(dir.path())));
    assert_ok!(store.create(TaskDraft::new("keep")));
    let doomed = store
        .create(TaskDraft::new("drop"))
        .unwrap()
        .unwrap()
        .id()
        .to_string();

    assert!(assert_ok!(store.delete(&doomed)));

    let reloaded = TaskStore::load(assert_ok!(FileStore::new(dir.path())));
    assert_eq!(reloaded.tasks().len(), 1);
    assert!(reloaded.get(&doomed).is_none());
}

#[test]
fn test_corrupt_blob_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("taskboard.tasks.json"), "{not json").unwrap();

    let store = TaskStore::load(assert_ok!(FileStore::new(dir.path())));
    assert!(store.tasks().is_empty());
}

#[test]
fn test_missing_blob_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::load(assert_ok!(FileStore::new(dir.path().join("fresh"))));
    assert!(store.tasks().is_empty());
}

#[test]
fn test_blank_title_is_rejected_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TaskStore::load(assert_ok!(FileStore::new(dir.path())));

    let created = assert_ok!(store.create(TaskDraft::new(" \t ")));
    assert!(created.is_none());
    assert!(!dir.path().join("taskboard.tasks.json").exists());
}

#[test]
fn test_update_keeps_identity_and_replaces_fields() {
    let mut store = TaskStore::load(MemoryStore::new());
    let original = store.create(draft("draft report")).unwrap().unwrap().clone();

    let mut edit = original.to_draft();
    edit.title = "final report".to_string();
    edit.deadline = None;
    edit.description = None;
    edit.status = Status::Doing;
    assert!(assert_ok!(store.update(original.id(), edit)));

    let updated = store.get(original.id()).unwrap();
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.created_at(), original.created_at());
    assert_eq!(updated.title, "final report");
    assert_eq!(updated.deadline, None);
    assert_eq!(updated.description, None);
    assert_eq!(updated.area, Area::Finance);
}

#[test]
fn test_update_with_blank_title_is_a_no_op() {
    let mut store = TaskStore::load(MemoryStore::new());
    let id = store.create(TaskDraft::new("keep me")).unwrap().unwrap().id().to_string();

    assert!(!assert_ok!(store.update(&id, TaskDraft::new(""))));
    assert_eq!(store.get(&id).unwrap().title, "keep me");
}

#[test]
fn test_set_status_persists() {
    let mut store = TaskStore::load(MemoryStore::new());
    let id = store.create(TaskDraft::new("call bank")).unwrap().unwrap().id().to_string();

    assert!(assert_ok!(store.set_status(&id, Status::Waiting)));

    let backend = store.into_backend();
    let blob = assert_ok!(backend.get(TASKS_KEY)).unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(persisted[0]["status"], "Waiting");
    assert_eq!(persisted[0]["id"], id.as_str());
}

#[test]
fn test_titles_are_trimmed_on_create() {
    let mut store = TaskStore::load(MemoryStore::new());
    let task = store.create(TaskDraft::new("  stretch  ")).unwrap().unwrap();
    assert_eq!(task.title, "stretch");
}
