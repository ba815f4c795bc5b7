/*
[INPUT]:  Loaded task store and configuration
[OUTPUT]: Interactive dashboard session on the alternate screen
[POS]:    TUI entry point for the taskboard binary
[UPDATE]: When changing TUI startup or shutdown handling
*/

pub mod terminal;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::app::App;
use crate::app::state::{AppState, Store};
use terminal::TerminalGuard;

/// Run the dashboard until the user quits or the process is interrupted
pub async fn run(store: Store, hide_done: bool) -> Result<()> {
    let mut app = App::new(AppState::new(store, hide_done));
    setup_signal_handlers(app.shutdown_token());

    let mut terminal = TerminalGuard::new()?;
    app.run(&mut terminal).await
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
