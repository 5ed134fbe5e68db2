//! Core application state and mode management

use whisperlog_core::{filter_recordings, Config, Recording, Snapshot};

use super::actions;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation mode - move the selection, invoke actions
    #[default]
    Normal,
    /// Search input active - every keystroke recomputes the filter
    Search,
    /// Action palette is open
    ActionPalette,
}

/// An action in the action palette
#[derive(Debug, Clone)]
pub struct ActionItem {
    /// Action identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Keyboard shortcut hint
    pub shortcut: Option<String>,
    /// Description
    pub description: String,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Resolved configuration (recordings base directory)
    pub config: Config,
    /// Search input; the only mutable cell the filter depends on
    pub search_input: String,
    /// Search cursor position (byte offset)
    pub search_cursor: usize,
    /// Fetched recordings, absent until the provider resolves
    pub recordings: Option<Vec<Recording>>,
    /// Whether the provider has not yet resolved
    pub is_loading: bool,
    /// Provider error message; suppresses the list entirely when set
    pub error: Option<String>,
    /// Derived filtered view, recomputed on every search change
    pub filtered: Option<Vec<Recording>>,
    /// Currently selected item index in the filtered list
    pub selected_index: usize,
    /// Scroll offset for the list view
    pub scroll_offset: usize,
    /// Action palette items (when open)
    pub action_items: Vec<ActionItem>,
    /// Selected action in the palette
    pub action_selected: usize,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Text to print on stdout after the terminal is restored (paste action)
    pub pending_output: Option<String>,
}

impl App {
    /// Create a new App instance, optionally starting with a query applied
    pub fn new(config: Config, initial_query: String) -> Self {
        let search_cursor = initial_query.len();
        Self {
            mode: Mode::Normal,
            config,
            search_input: initial_query,
            search_cursor,
            recordings: None,
            is_loading: true,
            error: None,
            filtered: None,
            selected_index: 0,
            scroll_offset: 0,
            action_items: Vec::new(),
            action_selected: 0,
            status_message: None,
            should_quit: false,
            pending_output: None,
        }
    }

    /// Fold a provider snapshot into the view state and recompute the
    /// derived filtered list.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.recordings = snapshot.recordings.clone();
        self.is_loading = snapshot.is_loading;
        self.error = snapshot.error.as_ref().map(|e| e.to_string());
        self.update_filter();
    }

    /// Recompute the filtered view from the already-fetched list. Never
    /// blocks and never errors; runs on every search keystroke.
    pub fn update_filter(&mut self) {
        self.filtered = filter_recordings(self.recordings.as_deref(), &self.search_input);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered.as_ref().map_or(0, Vec::len);
        if len == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.ensure_visible();
    }

    /// Get currently selected recording
    pub fn selected_recording(&self) -> Option<&Recording> {
        self.filtered.as_ref()?.get(self.selected_index)
    }

    /// Number of items currently displayed
    pub fn displayed_len(&self) -> usize {
        self.filtered.as_ref().map_or(0, Vec::len)
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Enter search mode (the query carries over; only typing changes it)
    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.search_cursor = self.search_input.len();
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Open the action palette for the current selection
    pub fn open_action_palette(&mut self) {
        let items = match self.selected_recording() {
            Some(recording) => actions::available_actions(recording),
            None => return,
        };
        self.action_items = items;
        self.action_selected = 0;
        self.mode = Mode::ActionPalette;
    }

    /// Close action palette
    pub fn close_action_palette(&mut self) {
        self.mode = Mode::Normal;
        self.action_items.clear();
    }

    /// Select next item in list (or palette)
    pub fn select_next(&mut self) {
        if self.mode == Mode::ActionPalette {
            if !self.action_items.is_empty() {
                self.action_selected = (self.action_selected + 1) % self.action_items.len();
            }
        } else {
            let len = self.displayed_len();
            if len > 0 {
                self.selected_index = (self.selected_index + 1) % len;
                self.ensure_visible();
            }
        }
    }

    /// Select previous item in list (or palette)
    pub fn select_prev(&mut self) {
        if self.mode == Mode::ActionPalette {
            if !self.action_items.is_empty() {
                self.action_selected = self
                    .action_selected
                    .checked_sub(1)
                    .unwrap_or(self.action_items.len().saturating_sub(1));
            }
        } else {
            let len = self.displayed_len();
            if len > 0 {
                self.selected_index = self
                    .selected_index
                    .checked_sub(1)
                    .unwrap_or(len - 1);
                self.ensure_visible();
            }
        }
    }

    /// Ensure selected item is visible
    fn ensure_visible(&mut self) {
        // Keep 2 items of context when scrolling
        const CONTEXT: usize = 2;

        if self.selected_index < self.scroll_offset + CONTEXT {
            self.scroll_offset = self.selected_index.saturating_sub(CONTEXT);
        }
        // Max visible is applied at render time based on actual height
    }

    /// Add a char to the search input (recomputes the filter)
    pub fn search_insert(&mut self, c: char) {
        self.search_input.insert(self.search_cursor, c);
        self.search_cursor += c.len_utf8();
        self.update_filter();
    }

    /// Delete the char before the cursor (recomputes the filter)
    pub fn search_backspace(&mut self) {
        if self.search_cursor > 0 {
            let prev = floor_char_boundary(&self.search_input, self.search_cursor - 1);
            self.search_input.remove(prev);
            self.search_cursor = prev;
            self.update_filter();
        }
    }

    /// Move the search cursor one char left
    pub fn search_cursor_left(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor = floor_char_boundary(&self.search_input, self.search_cursor - 1);
        }
    }

    /// Move the search cursor one char right
    pub fn search_cursor_right(&mut self) {
        if self.search_cursor < self.search_input.len() {
            let mut next = self.search_cursor + 1;
            while next < self.search_input.len() && !self.search_input.is_char_boundary(next) {
                next += 1;
            }
            self.search_cursor = next;
        }
    }
}

/// Largest char boundary at or below `index`
fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
