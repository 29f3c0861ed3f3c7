use ratatui::{Terminal, backend::Backend};
use tracing::warn;

use super::app::ViewState;
use super::browser::open_in_browser;
use super::ui;
use crate::controller::{PageModel, Surface};
use crate::errors::Result;

/// Terminal surface: redraws the whole frame on every render
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    pub view: ViewState,
    /// Disabled in tests so nothing is spawned
    launch_browser: bool,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            view: ViewState::default(),
            launch_browser: true,
        }
    }

    #[cfg(test)]
    pub fn without_browser(terminal: Terminal<B>) -> Self {
        Self {
            launch_browser: false,
            ..Self::new(terminal)
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn render(&mut self, page: &PageModel) {
        self.view.clamp_selection(page);
        let view = &self.view;
        if let Err(e) = self.terminal.draw(|frame| ui::draw(frame, page, view)) {
            warn!("Failed to draw frame: {}", e);
        }
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        if self.launch_browser {
            open_in_browser(url)
        } else {
            Ok(())
        }
    }
}
