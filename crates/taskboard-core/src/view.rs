/*
[INPUT]:  Task list, filter options, sort state and today's date
[OUTPUT]: Filtered and stably sorted task references
[POS]:    View pipeline - pure filter/sort composition behind every task listing
[UPDATE]: When quick filters, filter fields or sortable columns change
*/

use std::cmp::Ordering;

use chrono::NaiveDate;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use tracing::warn;

use crate::scoring::{days_left, level, score};
use crate::types::{Area, Level, QuickFilter, SortKey, Status, Task};

/// Window, in days from today, that counts as "due soon"
pub const DUE_SOON_DAYS: i64 = 3;

/// Filters applied before sorting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub quick: QuickFilter,
    pub status: Option<Status>,
    pub area: Option<Area>,
    pub search: String,
    pub hide_done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Explicit sort column, if any. Without one the view is ordered by descending score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Select a sort column: the same column again flips direction, a new one starts descending
    pub fn select(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Descending;
        }
    }

    /// Column and direction actually used for ordering
    pub fn effective(&self) -> (SortKey, SortDirection) {
        match self.key {
            Some(key) => (key, self.direction),
            None => (SortKey::Score, SortDirection::Descending),
        }
    }

    /// Header arrow for `key` when it is the explicitly selected column
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.key == Some(key)).then(|| self.direction.arrow())
    }
}

impl QuickFilter {
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            QuickFilter::All => true,
            QuickFilter::QuickWins => task.effort.is_quick(),
            QuickFilter::Critical => level(task, today) == Level::Critical,
            QuickFilter::DueSoon => days_left(task, today)
                .is_some_and(|days| (0..=DUE_SOON_DAYS).contains(&days)),
            QuickFilter::Waiting => task.status == Status::Waiting,
            QuickFilter::Done => task.status == Status::Done,
        }
    }
}

/// Run the pipeline: quick filter, hide-done, status, area, title search, then stable sort.
pub fn apply<'a>(
    tasks: &'a [Task],
    options: &ViewOptions,
    sort: &SortState,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let needle = options.search.to_lowercase();

    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| options.quick.matches(task, today))
        .filter(|task| !(options.hide_done && task.status == Status::Done))
        .filter(|task| options.status.is_none_or(|status| task.status == status))
        .filter(|task| options.area.is_none_or(|area| task.area == area))
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .collect();

    sort_tasks(&mut view, sort, today);
    view
}

/// Stable sort; descending reverses the comparator so ties keep list order either way.
pub fn sort_tasks(view: &mut [&Task], sort: &SortState, today: NaiveDate) {
    let (key, direction) = sort.effective();
    view.sort_by(|a, b| {
        let ordering = compare(a, b, key, today);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Task, b: &Task, key: SortKey, today: NaiveDate) -> Ordering {
    match key {
        SortKey::Title => locale_cmp(&a.title, &b.title),
        SortKey::Area => locale_cmp(a.area.label(), b.area.label()),
        SortKey::Type => locale_cmp(a.kind.label(), b.kind.label()),
        SortKey::Origin => locale_cmp(a.origin.label(), b.origin.label()),
        SortKey::Effort => locale_cmp(a.effort.label(), b.effort.label()),
        SortKey::Status => locale_cmp(a.status.label(), b.status.label()),
        SortKey::Impact => a.impact.cmp(&b.impact),
        SortKey::Urgency => a.urgency.cmp(&b.urgency),
        SortKey::Score => score(a, today).cmp(&score(b, today)),
        SortKey::DaysLeft => deadline_rank(a, today).cmp(&deadline_rank(b, today)),
        SortKey::Created => a.created_at().cmp(&b.created_at()),
    }
}

/// Missing deadlines rank as the far future
fn deadline_rank(task: &Task, today: NaiveDate) -> i64 {
    days_left(task, today).unwrap_or(i64::MAX)
}

thread_local! {
    /// Root-locale collator shared by every string comparison on this thread
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(error = %err, "collation data unavailable; falling back to case-folded order");
                None
            }
        };
}

/// Locale-aware string ordering.
///
/// Accents and case are secondary to the base letters, so "Éclair" sorts before "zebra"
/// and "apple" before "Banana". Strings equal under collation fall back to lowercase first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_toggles_same_key() {
        let mut sort = SortState::default();
        sort.select(SortKey::Impact);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.select(SortKey::Impact);
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.select(SortKey::Impact);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn select_new_key_starts_descending() {
        let mut sort = SortState::default();
        sort.select(SortKey::Title);
        sort.select(SortKey::Title);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.select(SortKey::Urgency);
        assert_eq!(sort.key, Some(SortKey::Urgency));
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn indicator_only_for_selected_key() {
        let mut sort = SortState::default();
        assert_eq!(sort.indicator(SortKey::Score), None);
        sort.select(SortKey::Score);
        assert_eq!(sort.indicator(SortKey::Score), Some("▼"));
        assert_eq!(sort.indicator(SortKey::Title), None);
    }

    #[test]
    fn locale_cmp_ignores_case() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_cmp_orders_accented_letters_with_their_base() {
        assert_eq!(locale_cmp("Éclair", "zebra"), Ordering::Less);
        assert_eq!(locale_cmp("éclair", "eclairs"), Ordering::Less);
        assert_eq!(locale_cmp("Ångström", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("über", "tofu"), Ordering::Greater);
    }
}
