/*
[INPUT]:  Task field flags, or interactive answers when no title is given
[OUTPUT]: New task persisted to the store
[POS]:    CLI task creation layer
[UPDATE]: When task fields change
*/

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use taskboard_core::types::models::{SCALE_MAX, SCALE_MIN};
use taskboard_core::{
    Area, Effort, KeyValueStore, Origin, Status, TaskDraft, TaskStore, TaskType, level, score,
    today,
};

use crate::ui::components::task_form::DEADLINE_FORMAT;

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Task title; prompts for every unset field when omitted
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub area: Option<Area>,
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<TaskType>,
    #[arg(long)]
    pub origin: Option<Origin>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub impact: Option<u8>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub urgency: Option<u8>,
    #[arg(long)]
    pub effort: Option<Effort>,
    /// Deadline as YYYY-MM-DD
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    #[arg(long)]
    pub status: Option<Status>,
}

impl AddArgs {
    /// Draft from flags alone; unset fields take the defaults
    pub fn to_draft(&self) -> TaskDraft {
        let defaults = TaskDraft::default();
        TaskDraft {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone(),
            area: self.area.unwrap_or(defaults.area),
            kind: self.kind.unwrap_or(defaults.kind),
            origin: self.origin.unwrap_or(defaults.origin),
            impact: self.impact.unwrap_or(defaults.impact),
            urgency: self.urgency.unwrap_or(defaults.urgency),
            effort: self.effort.unwrap_or(defaults.effort),
            deadline: self.deadline,
            status: self.status.unwrap_or(defaults.status),
        }
    }
}

pub fn run<B: KeyValueStore>(store: &mut TaskStore<B>, args: AddArgs) -> Result<()> {
    let draft = if args.title.is_some() {
        args.to_draft()
    } else {
        prompt_draft(&args)?
    };

    let Some(task) = store.create(draft)? else {
        eprintln!("{}", style("Nothing added: task title is blank").dim());
        return Ok(());
    };

    let today = today();
    println!(
        "{} {} {}",
        style("Created").bold().green(),
        style(&task.title).cyan(),
        style(format!(
            "(score {}, {}, id {})",
            score(task, today),
            level(task, today),
            task.id()
        ))
        .dim()
    );
    Ok(())
}

fn select_label<T: Copy + PartialEq + std::fmt::Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T],
    preset: Option<T>,
    default: T,
) -> Result<T> {
    if let Some(value) = preset {
        return Ok(value);
    }
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let start = options.iter().position(|option| *option == default).unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(start)
        .interact()?;
    Ok(options[index])
}

fn prompt_draft(args: &AddArgs) -> Result<TaskDraft> {
    let theme = ColorfulTheme::default();
    let defaults = TaskDraft::default();
    println!("{}", style("New task").bold().cyan());

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("title must not be blank")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description = match &args.description {
        Some(text) => Some(text.clone()),
        None => {
            let text: String = Input::with_theme(&theme)
                .with_prompt("Description (optional)")
                .allow_empty(true)
                .interact_text()?;
            Some(text)
        }
    };

    let area = select_label(&theme, "Area", Area::ALL, args.area, defaults.area)?;
    let kind = select_label(&theme, "Type", TaskType::ALL, args.kind, defaults.kind)?;
    let origin = select_label(&theme, "Origin", Origin::ALL, args.origin, defaults.origin)?;
    let scale: Vec<u8> = (SCALE_MIN..=SCALE_MAX).collect();
    let impact = select_label(&theme, "Impact", &scale, args.impact, defaults.impact)?;
    let urgency = select_label(&theme, "Urgency", &scale, args.urgency, defaults.urgency)?;
    let effort = select_label(&theme, "Effort", Effort::ALL, args.effort, defaults.effort)?;

    let deadline = match args.deadline {
        Some(date) => Some(date),
        None => {
            let text: String = Input::with_theme(&theme)
                .with_prompt("Deadline (YYYY-MM-DD, optional)")
                .allow_empty(true)
                .validate_with(|input: &String| {
                    if input.trim().is_empty()
                        || NaiveDate::parse_from_str(input.trim(), DEADLINE_FORMAT).is_ok()
                    {
                        Ok(())
                    } else {
                        Err("expected YYYY-MM-DD")
                    }
                })
                .interact_text()?;
            match text.trim() {
                "" => None,
                text => Some(NaiveDate::parse_from_str(text, DEADLINE_FORMAT)?),
            }
        }
    };

    Ok(TaskDraft {
        title,
        description,
        area,
        kind,
        origin,
        impact,
        urgency,
        effort,
        deadline,
        status: args.status.unwrap_or(defaults.status),
    })
}
