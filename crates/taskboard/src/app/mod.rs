pub mod event;
pub mod state;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use taskboard_core::{FileStore, KeyValueStore, MemoryStore, TaskStore};

use crate::app::event::AppEvent;
use crate::app::state::{AppState, Store};
use crate::tui::terminal::TerminalGuard;

const TICK_RATE: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Open the task store: file-backed under `data_dir`, or in memory when `ephemeral`
pub fn open_store(data_dir: &Path, ephemeral: bool) -> Result<Store> {
    let backend: Box<dyn KeyValueStore + Send> = if ephemeral {
        info!("using in-memory task store");
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::new(data_dir)
            .with_context(|| format!("open data directory {}", data_dir.display()))?;
        info!(data_dir = %store.dir().display(), "using file task store");
        Box::new(store)
    };
    Ok(TaskStore::load(backend))
}

pub struct App {
    pub state: AppState,
    event_tx: mpsc::Sender<AppEvent>,
    event_rx: mpsc::Receiver<AppEvent>,
    shutdown: CancellationToken,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (event_tx, event_rx) = mpsc::channel(100);
        Self {
            state,
            event_tx,
            event_rx,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token that stops the loop when cancelled, e.g. from a signal handler
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn run(&mut self, terminal: &mut TerminalGuard) -> Result<()> {
        let mut interval = tokio::time::interval(TICK_RATE);
        let event_tx = self.event_tx.clone();
        let input_shutdown = self.shutdown.child_token();
        let input_shutdown_clone = input_shutdown.clone();

        let input_task = tokio::task::spawn_blocking(move || {
            while !input_shutdown_clone.is_cancelled() {
                if !crossterm_event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                    continue;
                }
                let event = match crossterm_event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                    Ok(_) => continue,
                    Err(err) => {
                        warn!(error = %err, "terminal input failed");
                        break;
                    }
                };
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        info!("dashboard started");
        terminal.draw(|frame| crate::ui::render(frame, &self.state))?;

        while !self.state.should_quit {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                _ = interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
            }

            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
        }

        input_shutdown.cancel();
        if let Err(err) = input_task.await {
            warn!(error = %err, "input reader did not stop cleanly");
        }
        info!("dashboard stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.state.update_tick(),
            AppEvent::Key(key) => self.state.handle_key(key),
            AppEvent::Resize(width, height) => debug!(width, height, "terminal resized"),
        }
    }
}
