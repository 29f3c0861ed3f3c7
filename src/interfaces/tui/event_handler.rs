//! Event handling for TUI
//!
//! Translates key presses into view-state changes, form edits and
//! controller events.

use ratatui::backend::Backend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Focus;
use super::surface::TerminalSurface;
use crate::controller::{ClientController, Surface, UiEvent};

/// Handle one key press; returns `true` when the app should exit
pub async fn handle_key_event<B: Backend>(
    controller: &mut ClientController,
    surface: &mut TerminalSurface<B>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Esc => return true,
        KeyCode::Char('y') if ctrl => {
            controller.dispatch(UiEvent::CopyRequested, surface).await;
            return false;
        }
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Tab => surface.view.focus = surface.view.focus.next(),
        KeyCode::BackTab => surface.view.focus = surface.view.focus.prev(),
        _ if surface.view.focus.is_form() => {
            return handle_form_key(controller, surface, key.code).await;
        }
        _ => return handle_list_key(controller, surface, key.code).await,
    }

    surface.render(controller.page());
    false
}

async fn handle_form_key<B: Backend>(
    controller: &mut ClientController,
    surface: &mut TerminalSurface<B>,
    key_code: KeyCode,
) -> bool {
    let focus = surface.view.focus;
    match key_code {
        KeyCode::Enter => {
            if controller.page().submit_enabled() {
                let form = controller.page().form.clone();
                controller
                    .dispatch(
                        UiEvent::Submit {
                            url: form.url,
                            alias: form.alias,
                            expires_in: None,
                        },
                        surface,
                    )
                    .await;
            }
            return false;
        }
        KeyCode::Char(c) => {
            let form = controller.form_mut();
            match focus {
                Focus::Url => form.url.push(c),
                Focus::Alias => form.alias.push(c),
                Focus::Links => {}
            }
        }
        KeyCode::Backspace => {
            let form = controller.form_mut();
            match focus {
                Focus::Url => form.url.pop(),
                Focus::Alias => form.alias.pop(),
                Focus::Links => None,
            };
        }
        KeyCode::Down => surface.view.focus = focus.next(),
        KeyCode::Up => surface.view.focus = focus.prev(),
        _ => {}
    }

    surface.render(controller.page());
    false
}

async fn handle_list_key<B: Backend>(
    controller: &mut ClientController,
    surface: &mut TerminalSurface<B>,
    key_code: KeyCode,
) -> bool {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Up | KeyCode::Char('k') => surface.view.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => {
            surface.view.move_selection_down(controller.page())
        }
        KeyCode::Enter => {
            if let Some(row) = surface.view.selected_row(controller.page()) {
                let short_code = row.short_code.clone();
                controller
                    .dispatch(UiEvent::RowActivated { short_code }, surface)
                    .await;
            }
            return false;
        }
        KeyCode::Char('o') => {
            if let Some(row) = surface.view.selected_row(controller.page()) {
                let short_url = row.short_url.clone();
                controller
                    .dispatch(UiEvent::AnchorActivated { short_url }, surface)
                    .await;
            }
            return false;
        }
        KeyCode::Char('y') | KeyCode::Char('c') => {
            controller.dispatch(UiEvent::CopyRequested, surface).await;
            return false;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            controller.dispatch(UiEvent::RefreshRequested, surface).await;
            return false;
        }
        _ => {}
    }

    surface.render(controller.page());
    false
}
