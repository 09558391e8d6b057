mod charts;
mod config;
mod consts;
mod device;
mod events;
mod layout;
mod live_data;
mod logging;
mod navigation;
mod notifications;
mod stats;
mod tables;
mod timers;
mod ui;

use crate::config::{
    Config, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, get_config_path,
    get_preferences_path,
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::live_data::SimulatedFeed;
use crate::logging::{ActivityLogger, get_rust_log_level};
use crate::ui::dashboard::Dashboard;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Instant;
use std::{error::Error, io};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the admin dashboard
    Start {
        /// Disable background colors
        #[arg(long)]
        no_background_color: bool,

        /// Treat the terminal as this many pixels wide when picking the device tier.
        #[arg(long, value_name = "PIXELS")]
        width_px: Option<u32>,

        /// Do not simulate live order updates.
        #[arg(long)]
        no_live_updates: bool,
    },
    /// Forget stored preferences such as the collapsed sidebar.
    ResetPreferences,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let preferences_path = get_preferences_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            no_background_color,
            width_px,
            no_live_updates,
        } => {
            let mut config = Config::load_or_default(&config_path);
            if no_background_color {
                config.with_background_color = false;
            }
            if no_live_updates {
                config.live_updates = false;
            }
            let store: Box<dyn PreferenceStore> = match FilePreferenceStore::open(preferences_path)
            {
                Ok(store) => Box::new(store),
                Err(e) => {
                    eprintln!("Preferences unavailable, using defaults: {}", e);
                    Box::new(MemoryPreferenceStore::default())
                }
            };
            start(config, store, width_px).await
        }
        Command::ResetPreferences => {
            println!("Clearing stored dashboard preferences...");
            FilePreferenceStore::clear(&preferences_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard.
///
/// # Arguments
/// * `config` - Loaded configuration, with command-line overrides applied.
/// * `store` - Where the sidebar preference is read from and written to.
/// * `width_px` - Viewport width at the starting column count, overriding the cell-size estimate.
async fn start(
    mut config: Config,
    store: Box<dyn PreferenceStore>,
    width_px: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    ActivityLogger::new(event_sender, get_rust_log_level()).install()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    if width_px.is_some() {
        config.viewport_width_px = width_px;
    }

    let dashboard = Dashboard::new(
        &config,
        store,
        Box::new(SimulatedFeed::new(rand::thread_rng())),
        Rect::new(0, 0, size.width, size.height),
        Instant::now(),
    );
    let app = ui::App::new(dashboard, event_receiver);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
