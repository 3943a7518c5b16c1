// Segment View
// Terminal demo of a segmented tab control with an animated selection indicator

// IMPORTS ------------------>>

use anyhow::Result;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tui_components::SegmentControlManager;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

// Module imports
use segment_view::config::ConfigFile;
use segment_view::config_validation::load_and_validate_config;
use segment_view::core::{App, AppConfig, AppEvent, EventHandler};
use segment_view::logging::init_logging;
use segment_view::render::render_app;

//--------------------------------------------------------<<

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Segmented tab control demo
#[derive(Parser, Debug)]
#[command(name = "segment-view", version, about)]
struct Args {
    /// Path to config.yaml (defaults to the bundled one)
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Item labels, overriding the configured ones
    #[arg(value_name = "ITEMS")]
    items: Vec<String>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let args = Args::parse();
    let app_config = AppConfig::default();

    // Held until exit so the non-blocking writer flushes
    let _log_guard = init_logging(&app_config.logging)?;

    // Load and validate configuration from YAML file
    let validated = load_and_validate_config(args.config)?.with_items(args.items);
    let file = validated.file;
    let mut manager = validated.manager;
    let mut app = App::new(app_config, validated.selection);

    // Setup terminal
    let mouse_enabled = app.config.ui.mouse_enabled;
    let mut terminal = setup_terminal(mouse_enabled)?;

    let result = run(&mut terminal, &mut app, &mut manager, &file);

    // Restore terminal even when the loop failed
    restore_terminal(&mut terminal, mouse_enabled)?;
    info!(selection = app.selection, "exit");

    result
}

fn setup_terminal(mouse_enabled: bool) -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui, mouse_enabled: bool) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(
    terminal: &mut Tui,
    app: &mut App,
    manager: &mut SegmentControlManager,
    file: &ConfigFile,
) -> Result<()> {
    info!(hwnd = manager.hwnd(), selection = app.selection, "start");

    while !app.should_quit {
        terminal.draw(|f| render_app(f, app, manager, file))?;

        // Redraw quickly while the indicator is moving, otherwise idle
        let animating = manager.state().is_animating(Instant::now());
        if !event::poll(app.config.ui.poll_timeout(animating))? {
            continue;
        }

        let before = app.selection;
        match EventHandler::handle(event::read()?) {
            AppEvent::Quit => app.quit(),
            AppEvent::Navigate(key) => {
                manager.handle_key(&key, &mut app.selection);
            }
            AppEvent::Pointer(mouse) => {
                if app.config.ui.mouse_enabled {
                    manager.handle_mouse(&mouse, &mut app.selection);
                }
            }
            AppEvent::Resize => manager.on_resize(),
            AppEvent::None => {}
        }

        if app.selection != before {
            debug!(from = before, to = app.selection, "selection changed");
        }
    }

    Ok(())
}
