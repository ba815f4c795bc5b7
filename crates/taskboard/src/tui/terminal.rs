/*
[INPUT]:  Stdout, terminal raw mode, ratatui backend
[OUTPUT]: TerminalGuard managing alternate screen lifecycle
[POS]:    TUI terminal lifecycle guard
[UPDATE]: When changing terminal setup or teardown
*/

use std::io;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::crossterm::{ExecutableCommand, terminal};

pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let terminal = setup(
            terminal::enable_raw_mode,
            || io::stdout().execute(EnterAlternateScreen).map(|_| ()),
            || Terminal::new(CrosstermBackend::new(io::stdout())),
            restore_on_error,
        )?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

/// Raw mode, alternate screen, then the terminal itself.
///
/// A failing step undoes the steps before it through `restore`, which is told whether the
/// alternate screen was entered.
fn setup<T>(
    enable_raw: impl FnOnce() -> io::Result<()>,
    enter_screen: impl FnOnce() -> io::Result<()>,
    build: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(bool),
) -> Result<T> {
    enable_raw().context("enable raw mode")?;
    if let Err(err) = enter_screen() {
        restore(false);
        return Err(err).context("enter alternate screen");
    }
    match build() {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            restore(true);
            Err(err).context("create terminal")
        }
    }
}

fn restore_on_error(alternate_screen: bool) {
    if alternate_screen {
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
    let _ = terminal::disable_raw_mode();
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
