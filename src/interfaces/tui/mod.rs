//! Terminal User Interface (TUI) module
//!
//! Interactive front end over the page controller: shorten form, link list,
//! and a result panel with analytics.

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

mod app;
mod browser;
mod clipboard;
mod constants;
mod event_handler;
mod surface;
mod ui;

pub use clipboard::SystemClipboard;
pub use surface::TerminalSurface;

use crate::controller::{ClientController, Surface, UiEvent};
use crate::runtime::ClientContext;
use constants::TICK_RATE_MS;

/// Run the TUI application
pub async fn run_tui(ctx: &ClientContext) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut surface = TerminalSurface::new(Terminal::new(backend)?);

    let mut controller = ctx.controller(Box::new(SystemClipboard::new()));
    let res = run_app(&mut controller, &mut surface).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(surface.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    surface.terminal_mut().show_cursor()?;

    res
}

/// Main application loop
async fn run_app(
    controller: &mut ClientController,
    surface: &mut TerminalSurface<CrosstermBackend<io::Stderr>>,
) -> anyhow::Result<()> {
    info!("TUI started against {}", controller.api().base_url());
    surface.render(controller.page());
    controller.dispatch(UiEvent::Loaded, surface).await;

    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    loop {
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event_handler::handle_key_event(controller, surface, key).await {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => surface.render(controller.page()),
                _ => {}
            }
        }

        controller.tick(Instant::now(), surface);
    }
}
