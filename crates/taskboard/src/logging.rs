/*
[INPUT]:  Log level directive and output target
[OUTPUT]: Global tracing subscriber (stderr or non-blocking file writer)
[POS]:    Observability - logging setup shared by CLI and TUI modes
[UPDATE]: When changing log targets or formats
*/

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_NAME: &str = "taskboard.log";

fn env_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).context("invalid log level")
}

/// Log to stderr, used by the non-interactive subcommands
pub fn init_stderr(log_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Log to `<data_dir>/logs/taskboard.log` so the alternate screen stays clean.
///
/// The returned guard flushes pending lines on drop and must outlive the dashboard.
pub fn init_file(log_level: &str, data_dir: &Path) -> Result<WorkerGuard> {
    let log_dir = data_dir.join(LOG_DIR_NAME);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
