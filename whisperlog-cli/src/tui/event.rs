//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Execute an action by ID
    ExecuteAction(String),
    /// Rescan the recordings directory
    Refresh,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::ActionPalette => handle_action_palette(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }

        // Action palette for the current selection
        KeyCode::Enter | KeyCode::Char('a') => {
            app.open_action_palette();
            HandleResult::Continue
        }

        // Search
        KeyCode::Char('/') => {
            app.enter_search();
            HandleResult::Continue
        }

        // Rescan
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            HandleResult::Refresh
        }

        // Page navigation
        KeyCode::PageDown => {
            for _ in 0..10 {
                app.select_next();
            }
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            for _ in 0..10 {
                app.select_prev();
            }
            HandleResult::Continue
        }

        // Home/End
        KeyCode::Home | KeyCode::Char('g') => {
            app.selected_index = 0;
            app.scroll_offset = 0;
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            let len = app.displayed_len();
            if len > 0 {
                app.selected_index = len - 1;
            }
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys in search mode. Every edit recomputes the filtered view from
/// the already-fetched list; there is no debounce and no new fetch.
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        // Leave search mode; the query (and filter) stay applied
        KeyCode::Esc | KeyCode::Enter => {
            app.exit_mode();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.search_backspace();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.search_insert(c);
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.search_cursor_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.search_cursor_right();
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Handle keys in action palette mode
fn handle_action_palette(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_action_palette();
            HandleResult::Continue
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Enter => {
            if let Some(action) = app.action_items.get(app.action_selected) {
                let action_id = action.id.clone();
                app.close_action_palette();
                HandleResult::ExecuteAction(action_id)
            } else {
                HandleResult::Continue
            }
        }
        // Quick shortcuts: digits 1-9 or the action's own shortcut key
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10).unwrap() as usize - 1;
            if idx < app.action_items.len() {
                let action_id = app.action_items[idx].id.clone();
                app.close_action_palette();
                HandleResult::ExecuteAction(action_id)
            } else {
                HandleResult::Continue
            }
        }
        KeyCode::Char(c) => {
            let hit = app
                .action_items
                .iter()
                .find(|a| a.shortcut.as_deref() == Some(c.to_string().as_str()))
                .map(|a| a.id.clone());
            if let Some(action_id) = hit {
                app.close_action_palette();
                HandleResult::ExecuteAction(action_id)
            } else {
                HandleResult::Continue
            }
        }
        _ => HandleResult::Continue,
    }
}
