use chrono::NaiveDate;

use crate::types::{Area, Status, Task};
use crate::view::{self, SortState, ViewOptions};

/// How many tasks the "top priorities" list holds
pub const TOP_COUNT: usize = 3;

/// Summary of the whole task list for the insights panel
#[derive(Debug, Clone, PartialEq)]
pub struct Insights<'a> {
    pub total: usize,
    /// Highest scores first, ties in list order
    pub top: Vec<&'a Task>,
    pub by_area: Vec<(Area, usize)>,
    pub by_status: Vec<(Status, usize)>,
    pub avg_impact: Option<f64>,
    pub avg_urgency: Option<f64>,
}

pub fn summarize(tasks: &[Task], today: NaiveDate) -> Insights<'_> {
    let top = view::apply(tasks, &ViewOptions::default(), &SortState::default(), today)
        .into_iter()
        .take(TOP_COUNT)
        .collect();

    let by_area = Area::ALL
        .iter()
        .map(|area| (*area, tasks.iter().filter(|task| task.area == *area).count()))
        .collect();
    let by_status = Status::ALL
        .iter()
        .map(|status| {
            let count = tasks.iter().filter(|task| task.status == *status).count();
            (*status, count)
        })
        .collect();

    Insights {
        total: tasks.len(),
        top,
        by_area,
        by_status,
        avg_impact: average(tasks.iter().map(|task| task.impact)),
        avg_urgency: average(tasks.iter().map(|task| task.urgency)),
    }
}

fn average(values: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), value| {
        (sum + u64::from(value), count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskDraft;
    use chrono::Utc;

    fn task(id: &str, impact: u8, urgency: u8, area: Area, status: Status) -> Task {
        let mut draft = TaskDraft::new(id);
        draft.impact = impact;
        draft.urgency = urgency;
        draft.area = area;
        draft.status = status;
        Task::from_parts(id, Utc::now(), draft)
    }

    #[test]
    fn empty_list_has_no_averages() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let insights = summarize(&[], today);
        assert_eq!(insights.total, 0);
        assert!(insights.top.is_empty());
        assert_eq!(insights.avg_impact, None);
        assert!(insights.by_area.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn counts_averages_and_top_three() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let tasks = vec![
            task("a", 1, 1, Area::Work, Status::Inbox),
            task("b", 5, 5, Area::Home, Status::Doing),
            task("c", 3, 3, Area::Work, Status::Done),
            task("d", 4, 2, Area::Health, Status::Waiting),
            task("e", 4, 4, Area::Work, Status::Inbox),
        ];

        let insights = summarize(&tasks, today);

        let top: Vec<&str> = insights.top.iter().map(|task| task.id()).collect();
        assert_eq!(top, vec!["b", "e", "a"]);
        assert!(insights.by_area.contains(&(Area::Work, 3)));
        assert!(insights.by_area.contains(&(Area::Finance, 0)));
        assert!(insights.by_status.contains(&(Status::Inbox, 2)));
        assert_eq!(insights.avg_impact, Some(17.0 / 5.0));
        assert_eq!(insights.avg_urgency, Some(3.0));
    }
}
