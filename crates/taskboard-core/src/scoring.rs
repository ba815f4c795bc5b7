/*
[INPUT]:  Task priority fields (impact, urgency, deadline, status) and today's date
[OUTPUT]: Integer priority score and qualitative Level
[POS]:    Scoring engine - pure ranking function used by views and insights
[UPDATE]: When scoring weights or level thresholds change
*/

use chrono::{Local, NaiveDate};

use crate::types::{Level, Status, Task};

/// Score at or above which a task is Critical
pub const CRITICAL_THRESHOLD: i64 = 900;
/// Score at or above which a task is High
pub const HIGH_THRESHOLD: i64 = 30;
/// Score at or above which a task is Medium
pub const MEDIUM_THRESHOLD: i64 = 10;

const IMPACT_WEIGHT: i64 = 2;
const DEADLINE_BONUS: i64 = 1000;
const DEADLINE_DAY_COST: i64 = 20;
const WAITING_PENALTY: i64 = 10;

/// Local calendar date; the only clock read in the scoring path
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar days from `today` to `deadline`; negative once overdue
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Days left before the task's deadline, if it has one
pub fn days_left(task: &Task, today: NaiveDate) -> Option<i64> {
    task.deadline.map(|deadline| days_until(deadline, today))
}

/// Priority score of a task.
///
/// Done tasks score 0. Otherwise `impact * 2 + urgency`, plus `1000 - days * 20` when a
/// deadline is set, minus 10 while waiting. Far-off deadlines can push the score negative.
pub fn score(task: &Task, today: NaiveDate) -> i64 {
    if task.status == Status::Done {
        return 0;
    }

    let mut score = i64::from(task.impact) * IMPACT_WEIGHT + i64::from(task.urgency);
    if let Some(days) = days_left(task, today) {
        score += DEADLINE_BONUS - days * DEADLINE_DAY_COST;
    }
    if task.status == Status::Waiting {
        score -= WAITING_PENALTY;
    }
    score
}

pub fn level(task: &Task, today: NaiveDate) -> Level {
    Level::from_score(score(task, today))
}

impl Level {
    pub fn from_score(score: i64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Level::Critical
        } else if score >= HIGH_THRESHOLD {
            Level::High
        } else if score >= MEDIUM_THRESHOLD {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskDraft;
    use chrono::Utc;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(impact: u8, urgency: u8, deadline: Option<NaiveDate>, status: Status) -> Task {
        let mut draft = TaskDraft::new("scored");
        draft.impact = impact;
        draft.urgency = urgency;
        draft.deadline = deadline;
        draft.status = status;
        Task::from_parts("t", Utc::now(), draft)
    }

    #[test]
    fn no_deadline_scores_base_only() {
        let today = day(2026, 5, 1);
        let task = task(5, 5, None, Status::Doing);
        assert_eq!(score(&task, today), 15);
        assert_eq!(level(&task, today), Level::Medium);
    }

    #[test]
    fn deadline_today_dominates() {
        let today = day(2026, 5, 1);
        let task = task(1, 1, Some(today), Status::Doing);
        assert_eq!(score(&task, today), 1003);
        assert_eq!(level(&task, today), Level::Critical);
    }

    #[rstest]
    #[case(1, 1, None)]
    #[case(5, 5, Some(day(2026, 5, 1)))]
    #[case(3, 4, Some(day(2027, 1, 1)))]
    fn done_always_scores_zero(
        #[case] impact: u8,
        #[case] urgency: u8,
        #[case] deadline: Option<NaiveDate>,
    ) {
        let today = day(2026, 5, 1);
        let task = task(impact, urgency, deadline, Status::Done);
        assert_eq!(score(&task, today), 0);
        assert_eq!(level(&task, today), Level::Low);
    }

    #[test]
    fn waiting_subtracts_ten() {
        let today = day(2026, 5, 1);
        let waiting = task(4, 4, None, Status::Waiting);
        assert_eq!(score(&waiting, today), 2);
    }

    #[test]
    fn far_deadline_can_go_negative() {
        let today = day(2026, 1, 1);
        let far = task(1, 1, Some(day(2026, 12, 31)), Status::Inbox);
        let days = days_until(day(2026, 12, 31), today);
        assert_eq!(days, 364);
        assert_eq!(score(&far, today), 3 + 1000 - 364 * 20);
        assert!(score(&far, today) < 0);
        assert_eq!(level(&far, today), Level::Low);
    }

    #[test]
    fn overdue_adds_more_than_bonus() {
        let today = day(2026, 5, 10);
        let overdue = task(1, 1, Some(day(2026, 5, 8)), Status::Inbox);
        assert_eq!(score(&overdue, today), 3 + 1000 + 40);
    }

    #[test]
    fn days_until_counts_calendar_days() {
        assert_eq!(days_until(day(2026, 3, 1), day(2026, 2, 28)), 1);
        assert_eq!(days_until(day(2026, 2, 28), day(2026, 2, 28)), 0);
        assert_eq!(days_until(day(2026, 2, 27), day(2026, 2, 28)), -1);
    }

    #[rstest]
    #[case(900, Level::Critical)]
    #[case(899, Level::High)]
    #[case(30, Level::High)]
    #[case(29, Level::Medium)]
    #[case(10, Level::Medium)]
    #[case(9, Level::Low)]
    #[case(-500, Level::Low)]
    fn level_thresholds(#[case] score: i64, #[case] expected: Level) {
        assert_eq!(Level::from_score(score), expected);
    }

    #[test]
    fn score_ignores_non_priority_fields() {
        let today = day(2026, 5, 1);
        let a = task(3, 2, Some(day(2026, 5, 4)), Status::Inbox);
        let mut b = a.clone();
        b.title = "something else".to_string();
        b.description = Some("notes".to_string());
        assert_eq!(score(&a, today), score(&b, today));
    }
}
