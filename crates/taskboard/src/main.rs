/*
[INPUT]:  CLI arguments, YAML configuration file, TASKBOARD_* environment
[OUTPUT]: Interactive dashboard or one-shot list/add/init-config commands
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use taskboard::app::open_store;
use taskboard::cli::add::AddArgs;
use taskboard::cli::list::ListArgs;
use taskboard::config::{AppConfig, default_config_path};
use taskboard::{cli, logging, tui};
use taskboard_core::store::default_data_dir;

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Terminal dashboard for prioritising tasks")]
struct Cli {
    /// Configuration file (default: <config dir>/taskboard/config.yaml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Directory holding tasks and logs
    #[arg(long = "data-dir", value_name = "PATH", global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    /// Keep tasks in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dashboard (default)
    Tui,
    /// Print tasks through the filter/sort pipeline
    List(ListArgs),
    /// Create a task from flags or prompts
    Add(AddArgs),
    /// Write a default configuration file
    InitConfig {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::InitConfig { output, force }) = &args.command {
        let output = output
            .clone()
            .or_else(default_config_path)
            .context("no config directory available; pass --output")?;
        return cli::init::run_init(&output, *force);
    }

    let config = load_config(&args)?;
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    match args.command {
        None | Some(Command::Tui) => {
            let _log_guard = logging::init_file(&config.log_level, &data_dir)?;
            info!(data_dir = %data_dir.display(), "starting taskboard");
            let store = open_store(&data_dir, args.ephemeral)?;
            tui::run(store, config.hide_done).await
        }
        Some(Command::List(list_args)) => {
            logging::init_stderr(&config.log_level)?;
            let store = open_store(&data_dir, args.ephemeral)?;
            cli::list::run(&store, &list_args, config.hide_done)
        }
        Some(Command::Add(add_args)) => {
            logging::init_stderr(&config.log_level)?;
            let mut store = open_store(&data_dir, args.ephemeral)?;
            cli::add::run(&mut store, add_args)
        }
        Some(Command::InitConfig { .. }) => Ok(()),
    }
}

/// Config file and environment, then command-line overrides
fn load_config(args: &Cli) -> Result<AppConfig> {
    let mut config = match args.config_path.clone().or_else(default_config_path) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}
