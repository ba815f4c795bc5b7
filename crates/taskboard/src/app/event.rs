use ratatui::crossterm::event::KeyEvent;

/// Inputs to the dashboard loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Fired every 250ms; ages status messages and refreshes today's date
    Tick,

    Key(KeyEvent),

    /// New terminal size (width, height); the next draw picks it up
    Resize(u16, u16),
}
