// workout-panes-tui/src/main.rs
use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::{io, time::Duration};
use tracing_subscriber::EnvFilter;
use workout_panes_lib::{AppService, Config};

// Declare modules
mod app;
mod ui;

use crate::app::App;

fn main() -> Result<()> {
    // Initialize the library service
    let app_service = AppService::initialize().context("Failed to initialize AppService")?;
    init_logging(&app_service.config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it; the first activation uses the current width
    let width = terminal.size()?.width;
    let mut app = App::new(app_service, width);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err); // Print errors to stderr
    }

    Ok(())
}

// The terminal is the UI, so logs only go to a file when one is configured
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply queued panel transactions and pick up store changes
        app.tick();

        terminal.draw(|f| ui::render_ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Only process key press events
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key)?;
                }
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
