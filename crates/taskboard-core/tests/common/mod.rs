/*
[INPUT]:  Fixed calendar date and task field overrides
[OUTPUT]: Shared fixtures for store and view tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new fixtures or task fields
*/

//! Common test utilities for taskboard-core tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use taskboard_core::{Area, Effort, Origin, Status, Task, TaskDraft, TaskType};

/// Fixed "today" so scores never depend on the wall clock
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

pub fn in_days(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// Builder over [`TaskDraft`] producing tasks with deterministic ids and timestamps
pub struct TaskBuilder {
    id: String,
    minute: u32,
    draft: TaskDraft,
}

pub fn task(id: &str) -> TaskBuilder {
    TaskBuilder {
        id: id.to_string(),
        minute: 0,
        draft: TaskDraft::new(id),
    }
}

impl TaskBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.draft.title = title.to_string();
        self
    }

    pub fn scales(mut self, impact: u8, urgency: u8) -> Self {
        self.draft.impact = impact;
        self.draft.urgency = urgency;
        self
    }

    pub fn area(mut self, area: Area) -> Self {
        self.draft.area = area;
        self
    }

    pub fn kind(mut self, kind: TaskType) -> Self {
        self.draft.kind = kind;
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.draft.origin = origin;
        self
    }

    pub fn effort(mut self, effort: Effort) -> Self {
        self.draft.effort = effort;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.draft.status = status;
        self
    }

    pub fn due_in(mut self, days: i64) -> Self {
        self.draft.deadline = Some(in_days(days));
        self
    }

    pub fn created_minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    pub fn build(self) -> Task {
        let created = Utc
            .with_ymd_and_hms(2026, 5, 1, 9, self.minute, 0)
            .unwrap();
        Task::from_parts(self.id, created, self.draft)
    }
}

pub fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(|task| task.id()).collect()
}
