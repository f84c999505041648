//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION_SECS, TICK_RATE_MS};
use crate::logging::ActivityLog;
use crate::navigation::TabId;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use log::info;
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Tab selected once the dashboard is shown.
    pub start_tab: Option<TabId>,
    pub export_dir: Option<PathBuf>,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            with_background_color: true,
            start_tab: None,
            export_dir: None,
        }
    }
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        start_tab: Option<TabId>,
        export_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            with_background_color,
            start_tab,
            export_dir,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The tabbed dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,

    /// Shared with the logger so the footer can show recent activity.
    activity: ActivityLog,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig, activity: ActivityLog) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
            activity,
        }
    }

    /// Leaves the splash screen for the dashboard.
    fn open_dashboard(&mut self) {
        let state = DashboardState::new(self.ui_config.clone(), self.activity.clone());
        info!("Dashboard ready on the {} tab", state.active().label());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(TICK_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.open_dashboard(),
                    Screen::Dashboard(state) => state.handle_key(key.code),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
