//! Terminal setup and the main event loop

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

use super::app::App;
use super::core::{EventHandler, EventType};
use crate::config::Config;
use crate::orders::OrderBook;

/// Run the main TUI application
pub async fn run_app(config: &Config, orders: OrderBook) -> Result<()> {
    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, orders);
    let mut event_handler = EventHandler::with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms));

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event(app.next_deadline()).await? {
            EventType::Key(key) => {
                app.handle_key(key);
                app.end_cycle();
                needs_render = true;
            }
            EventType::Mouse(mouse) => {
                app.handle_mouse(mouse);
                app.end_cycle();
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                // Only redraw when deferred state actually moved
                if app.tick() {
                    app.end_cycle();
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
