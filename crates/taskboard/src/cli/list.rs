/*
[INPUT]:  Task store plus filter/sort flags
[OUTPUT]: Filtered task listing on stdout (table or JSON)
[POS]:    CLI listing layer
[UPDATE]: When view options or listed columns change
*/

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use taskboard_core::view::{self, SortState, ViewOptions};
use taskboard_core::{
    Area, KeyValueStore, Level, QuickFilter, SortKey, Status, Task, TaskStore, days_left, level,
    score, today,
};

use crate::ui::components::format::{days_left_label, truncate};

const TITLE_WIDTH: usize = 40;

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Quick filter: all, quick-wins, critical, due-soon, waiting, done
    #[arg(long, value_name = "FILTER")]
    pub quick: Option<QuickFilter>,
    #[arg(long, value_name = "STATUS")]
    pub status: Option<Status>,
    #[arg(long, value_name = "AREA")]
    pub area: Option<Area>,
    /// Case-insensitive title substring
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
    #[arg(long)]
    pub hide_done: bool,
    /// Sort column; repeat the same key to flip direction
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Vec<SortKey>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn view_options(&self, hide_done_default: bool) -> ViewOptions {
        ViewOptions {
            quick: self.quick.unwrap_or_default(),
            status: self.status,
            area: self.area,
            search: self.search.clone().unwrap_or_default(),
            hide_done: self.hide_done || hide_done_default,
        }
    }

    pub fn sort_state(&self) -> SortState {
        let mut sort = SortState::default();
        for key in &self.sort {
            sort.select(*key);
        }
        sort
    }
}

/// JSON row: the persisted task plus its derived ranking
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedTask<'a> {
    #[serde(flatten)]
    task: &'a Task,
    score: i64,
    level: Level,
    days_left: Option<i64>,
}

pub fn run<B: KeyValueStore>(
    store: &TaskStore<B>,
    args: &ListArgs,
    hide_done_default: bool,
) -> Result<()> {
    let today = today();
    let tasks = view::apply(
        store.tasks(),
        &args.view_options(hide_done_default),
        &args.sort_state(),
        today,
    );

    if args.json {
        let rows: Vec<ListedTask> = tasks
            .iter()
            .map(|&task| ListedTask {
                task,
                score: score(task, today),
                level: level(task, today),
                days_left: days_left(task, today),
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).context("serialize task list")?;
        println!("{json}");
        return Ok(());
    }

    if tasks.is_empty() {
        println!("{}", style("No matching tasks").dim());
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "{:<6} {:<9} {:<8} {:<9} {:<width$}",
            "Score",
            "Level",
            "Status",
            "Due",
            "Title",
            width = TITLE_WIDTH
        ))
        .bold()
    );
    for task in &tasks {
        let level = level(task, today);
        let level_label = format!("{:<9}", level.label());
        let level_label = match level {
            Level::Critical => style(level_label).red().bold(),
            Level::High => style(level_label).red(),
            Level::Medium => style(level_label).yellow(),
            Level::Low => style(level_label).dim(),
        };
        println!(
            "{:<6} {} {:<8} {:<9} {}",
            score(task, today),
            level_label,
            task.status.label(),
            days_left_label(days_left(task, today)),
            truncate(&task.title, TITLE_WIDTH)
        );
    }
    println!(
        "{}",
        style(format!("{} of {} tasks", tasks.len(), store.tasks().len())).dim()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_sort_flag_toggles_direction() {
        let args = ListArgs {
            sort: vec![SortKey::Impact, SortKey::Impact],
            ..ListArgs::default()
        };
        let sort = args.sort_state();
        assert_eq!(sort.key, Some(SortKey::Impact));
        assert_eq!(sort.indicator(SortKey::Impact), Some("▲"));
    }

    #[test]
    fn config_can_hide_done_by_default() {
        let args = ListArgs::default();
        assert!(args.view_options(true).hide_done);
        assert!(!args.view_options(false).hide_done);
    }
}
