/*
[INPUT]:  Persisted task schema and serde requirements
[OUTPUT]: Task record and TaskDraft payload
[POS]:    Data layer - task model shared by store, scoring and views
[UPDATE]: When the persisted task schema changes
*/

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Area, Effort, Origin, Status, TaskType};

/// Lowest value on the impact/urgency scale
pub const SCALE_MIN: u8 = 1;
/// Highest value on the impact/urgency scale
pub const SCALE_MAX: u8 = 5;

/// A tracked task.
///
/// `id` and `created_at` are fixed at construction; every other field is public and may be
/// replaced through [`Task::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: String,
    created_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub area: Area,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub origin: Origin,
    pub impact: u8,
    pub urgency: u8,
    pub effort: Effort,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub status: Status,
}

impl Task {
    /// Build a task with a fresh identifier and the current timestamp
    pub fn new(draft: TaskDraft) -> Self {
        Self::from_parts(Uuid::new_v4().to_string(), Utc::now(), draft)
    }

    pub fn from_parts(id: impl Into<String>, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            description,
            area,
            kind,
            origin,
            impact,
            urgency,
            effort,
            deadline,
            status,
        } = draft;
        Self {
            id: id.into(),
            created_at,
            title,
            description,
            area,
            kind,
            origin,
            impact,
            urgency,
            effort,
            deadline,
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace every mutable field with the draft's values
    pub fn apply(&mut self, draft: TaskDraft) {
        let id = std::mem::take(&mut self.id);
        *self = Self::from_parts(id, self.created_at, draft);
    }

    /// Snapshot of the mutable fields, used to seed an edit form
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            area: self.area,
            kind: self.kind,
            origin: self.origin,
            impact: self.impact,
            urgency: self.urgency,
            effort: self.effort,
            deadline: self.deadline,
            status: self.status,
        }
    }
}

/// Every mutable field of a task: the payload of create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub area: Area,
    pub kind: TaskType,
    pub origin: Origin,
    pub impact: u8,
    pub urgency: u8,
    pub effort: Effort,
    pub deadline: Option<NaiveDate>,
    pub status: Status,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            area: Area::Work,
            kind: TaskType::Task,
            origin: Origin::Myself,
            impact: 3,
            urgency: 3,
            effort: Effort::ThirtyMinutes,
            deadline: None,
            status: Status::Inbox,
        }
    }
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// A draft with a blank title is never stored
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Trim text fields, drop a blank description and clamp the 1-5 scales
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = self
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        self.impact = clamp_scale(self.impact);
        self.urgency = clamp_scale(self.urgency);
        self
    }
}

pub fn clamp_scale(value: u8) -> u8 {
    value.clamp(SCALE_MIN, SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_identity() {
        let created = Utc::now();
        let mut task = Task::from_parts("t-1", created, TaskDraft::new("before"));

        let mut draft = TaskDraft::new("after");
        draft.status = Status::Doing;
        task.apply(draft);

        assert_eq!(task.id(), "t-1");
        assert_eq!(task.created_at(), created);
        assert_eq!(task.title, "after");
        assert_eq!(task.status, Status::Doing);
    }

    #[test]
    fn serializes_with_camel_case_and_type_key() {
        let mut draft = TaskDraft::new("write report");
        draft.deadline = NaiveDate::from_ymd_opt(2026, 3, 14);
        let task = Task::from_parts("t-2", Utc::now(), draft);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["type"], "Task");
        assert_eq!(value["deadline"], "2026-03-14");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn normalized_clamps_and_trims() {
        let mut draft = TaskDraft::new("  pay rent  ");
        draft.description = Some("   ".to_string());
        draft.impact = 9;
        draft.urgency = 0;

        let draft = draft.normalized();
        assert_eq!(draft.title, "pay rent");
        assert_eq!(draft.description, None);
        assert_eq!(draft.impact, SCALE_MAX);
        assert_eq!(draft.urgency, SCALE_MIN);
    }
}
