//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::timers::{SPLASH_SECS, ui_tick};
use crate::events::ActivityEvent;
use crate::ui::dashboard::{Dashboard, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The admin dashboard.
    Dashboard(Box<Dashboard>),
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard waiting for the splash screen to end.
    pending_dashboard: Option<Box<Dashboard>>,

    /// Receives log records destined for the activity panel.
    event_receiver: mpsc::Receiver<ActivityEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(dashboard: Dashboard, event_receiver: mpsc::Receiver<ActivityEvent>) -> Self {
        Self {
            current_screen: Screen::Splash,
            pending_dashboard: Some(Box::new(dashboard)),
            event_receiver,
        }
    }

    /// Leaves the splash screen and starts the dashboard sized to `cols` x `rows`.
    fn open_dashboard(&mut self, cols: u16, rows: u16) {
        let Some(mut dashboard) = self.pending_dashboard.take() else {
            return;
        };
        // The terminal may have changed size while the splash was up.
        dashboard.set_terminal_size(cols, rows);
        dashboard.initialize();
        self.current_screen = Screen::Dashboard(dashboard);
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_SECS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            match &mut app.current_screen {
                Screen::Dashboard(dashboard) => dashboard.add_event(event),
                Screen::Splash => {
                    if let Some(dashboard) = app.pending_dashboard.as_mut() {
                        dashboard.add_event(event);
                    }
                }
            }
        }

        if let Screen::Dashboard(dashboard) = &mut app.current_screen {
            dashboard.update(Instant::now());
        }

        let progress = splash_start.elapsed().as_secs_f64() / splash_duration.as_secs_f64();
        terminal.draw(|f| render(f, &app.current_screen, progress))?;

        match &mut app.current_screen {
            Screen::Dashboard(dashboard) => dashboard.mark_frame_rendered(Instant::now()),
            Screen::Splash => {
                if splash_start.elapsed() >= splash_duration {
                    let size = terminal.size()?;
                    app.open_dashboard(size.width, size.height);
                    continue;
                }
            }
        }

        if !event::poll(ui_tick())? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        let quit = key.code == KeyCode::Char('q')
                            || (key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL));
                        if quit {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        let size = terminal.size()?;
                        app.open_dashboard(size.width, size.height);
                    }
                    Screen::Dashboard(dashboard) => {
                        if dashboard.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                    }
                }
            }
            Event::Mouse(mouse) => {
                if let Screen::Dashboard(dashboard) = &mut app.current_screen {
                    dashboard.handle_mouse(mouse, Instant::now());
                }
            }
            Event::Resize(cols, rows) => {
                if let Screen::Dashboard(dashboard) = &mut app.current_screen {
                    dashboard.handle_resize(cols, rows, Instant::now());
                }
            }
            _ => {}
        }
    }
}

/// Renders the current screen. `progress` is the elapsed share of the splash.
fn render(f: &mut Frame, screen: &Screen, progress: f64) {
    match screen {
        Screen::Splash => render_splash(f, progress),
        Screen::Dashboard(dashboard) => render_dashboard(f, dashboard),
    }
}
