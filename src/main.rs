use green_earth::{actions, app, catalog, config, event, fetch, logging, ui};

use anyhow::Result;
use app::AppState;
use catalog::{Endpoints, HttpCatalog};
use clap::Parser;
use config::{load_config, CliArgs};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch::Dispatcher;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use ui::layout::Mounts;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(config.log_file.as_deref())?;
    info!(api = %config.api_base_url, "green-earth starting");

    // A terminal too small for the category list and grid is only logged.
    let (width, height) = terminal::size()?;
    if let Err(err) = Mounts::require(width, height) {
        error!(%err, "cannot mount storefront");
        return Ok(ExitCode::FAILURE);
    }

    let catalog = Arc::new(HttpCatalog::new(
        Endpoints::new(config.api_base_url.clone()),
        &config.http_settings(),
    )?);
    let dispatcher = Dispatcher::new(catalog.clone());

    // Create application state
    let mut app = AppState::new(config, catalog.as_ref());
    app.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app, &dispatcher);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        error!(%err, "main loop failed");
        eprintln!("Error: {}", err);
        return Ok(ExitCode::FAILURE);
    }

    info!("green-earth exiting");
    Ok(ExitCode::SUCCESS)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    dispatcher: &Dispatcher,
) -> Result<()> {
    while app.running {
        // Send queued requests, apply finished ones, advance timers
        dispatcher.pump(app);
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
