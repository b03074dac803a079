//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::chart::{ChartError, ReadySignal};
use crate::consts::dashboard_consts::{UI_TICK_MS, chart::ready_timeout};
use crate::environment::Environment;
use crate::events::{Event as DashboardEvent, EventSender, EventType};
use crate::logging::LogLevel;
use crate::refresh::{DashboardSnapshot, RefreshHandle};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
    pub default_symbol: String,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        refresh_interval: Duration,
        default_symbol: String,
    ) -> Self {
        Self {
            with_background_color,
            refresh_interval,
            default_symbol,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Loading screen shown until the first snapshot arrives.
    Splash,
    /// Dashboard screen displaying the fetched data.
    Dashboard,
}

/// What a key press asks the application to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextSymbol,
    PreviousSymbol,
    /// Zero-based index into the symbol selector.
    PickSymbol(usize),
    Refresh,
    /// Leave the splash screen early.
    Continue,
}

impl Command {
    pub fn from_key(key: &KeyEvent, screen: Screen) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            _ if screen == Screen::Splash => Some(Command::Continue),
            KeyCode::Right | KeyCode::Tab => Some(Command::NextSymbol),
            KeyCode::Left | KeyCode::BackTab => Some(Command::PreviousSymbol),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Refresh),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| Command::PickSymbol(digit as usize - 1)),
            _ => None,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Everything the dashboard renders.
    state: DashboardState,

    /// Receives events from the refresh task and chart watchers.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Sends chart readiness events into the activity log.
    event_sender: EventSender,

    /// Receives completed snapshots from the refresh task.
    snapshot_receiver: mpsc::Receiver<DashboardSnapshot>,

    /// The running poll loop. Stopped when the app exits.
    refresh: RefreshHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        event_sender: EventSender,
        snapshot_receiver: mpsc::Receiver<DashboardSnapshot>,
        refresh: RefreshHandle,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(environment, Instant::now(), ui_config),
            event_receiver,
            event_sender,
            snapshot_receiver,
            refresh,
        }
    }

    fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        if let Some(signal) = self.state.apply_snapshot(snapshot) {
            self.watch_chart(signal);
        }
        self.current_screen = Screen::Dashboard;
    }

    /// Handles a command. Returns false when the app should exit.
    fn handle_command(&mut self, command: Command) -> bool {
        let remounted = match command {
            Command::Quit => return false,
            Command::Continue => {
                self.current_screen = Screen::Dashboard;
                None
            }
            Command::NextSymbol => self.state.cycle_symbol(1),
            Command::PreviousSymbol => self.state.cycle_symbol(-1),
            Command::PickSymbol(index) => self.state.select_symbol_index(index),
            Command::Refresh => {
                self.refresh.refresh_now();
                self.state
                    .add_event(DashboardEvent::dashboard("Manual refresh requested".to_string()));
                None
            }
        };
        if let Some(signal) = remounted {
            self.state.add_event(DashboardEvent::dashboard(format!(
                "Chart symbol set to {}",
                self.state.selection().selected()
            )));
            self.watch_chart(signal);
        }
        true
    }

    /// Reports the outcome of a chart mount on the activity log.
    fn watch_chart(&self, signal: ReadySignal) {
        let symbol = self.state.chart().config.symbol.clone();
        let events = self.event_sender.clone();
        tokio::spawn(async move {
            match signal.wait(ready_timeout()).await {
                Ok(()) => {
                    events
                        .send_chart_event(
                            format!("Chart ready: {}", symbol),
                            EventType::Success,
                            LogLevel::Info,
                        )
                        .await;
                }
                // Replaced by a newer mount
                Err(ChartError::Closed) => {}
                Err(e) => {
                    log::warn!("{}: {}", symbol, e);
                    events
                        .send_chart_event(
                            format!("{}: {}", symbol, e),
                            EventType::Warning,
                            LogLevel::Warn,
                        )
                        .await;
                }
            }
        });
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut key_events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(UI_TICK_MS));
    app.watch_chart(app.state.chart().readiness());

    // UI event loop
    loop {
        app.state.update();
        terminal.draw(|f| render(f, &app))?;
        if app.current_screen == Screen::Dashboard {
            // The chart panel has been drawn for the current mount
            app.state.chart().mark_ready();
        }

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = app.event_receiver.recv() => {
                app.state.add_event(event);
                // Queue everything already waiting before redrawing
                while let Ok(event) = app.event_receiver.try_recv() {
                    app.state.add_event(event);
                }
            }
            Some(snapshot) = app.snapshot_receiver.recv() => app.apply_snapshot(snapshot),
            maybe_event = key_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    let Some(command) = Command::from_key(&key, app.current_screen) else {
                        continue;
                    };
                    if !app.handle_command(command) {
                        app.refresh.shutdown().await;
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => {
                    app.refresh.shutdown().await;
                    return Ok(());
                }
            },
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.state),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys_work_on_every_screen() {
        for screen in [Screen::Splash, Screen::Dashboard] {
            assert_eq!(Command::from_key(&key(KeyCode::Char('q')), screen), Some(Command::Quit));
            assert_eq!(Command::from_key(&key(KeyCode::Esc), screen), Some(Command::Quit));
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(Command::from_key(&ctrl_c, screen), Some(Command::Quit));
        }
    }

    #[test]
    fn test_any_other_key_leaves_splash() {
        assert_eq!(
            Command::from_key(&key(KeyCode::Right), Screen::Splash),
            Some(Command::Continue)
        );
        assert_eq!(
            Command::from_key(&key(KeyCode::Enter), Screen::Splash),
            Some(Command::Continue)
        );
    }

    #[test]
    fn test_dashboard_key_bindings() {
        let on_dashboard = |code| Command::from_key(&key(code), Screen::Dashboard);
        assert_eq!(on_dashboard(KeyCode::Right), Some(Command::NextSymbol));
        assert_eq!(on_dashboard(KeyCode::Tab), Some(Command::NextSymbol));
        assert_eq!(on_dashboard(KeyCode::Left), Some(Command::PreviousSymbol));
        assert_eq!(on_dashboard(KeyCode::Char('r')), Some(Command::Refresh));
        assert_eq!(on_dashboard(KeyCode::Char('1')), Some(Command::PickSymbol(0)));
        assert_eq!(on_dashboard(KeyCode::Char('9')), Some(Command::PickSymbol(8)));
        assert_eq!(on_dashboard(KeyCode::Char('0')), None);
        assert_eq!(on_dashboard(KeyCode::Enter), None);
    }
}
