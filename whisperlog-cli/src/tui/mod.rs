//! Transcription history TUI
//!
//! A single searchable list with:
//! - live substring filtering over the fetched recording list
//! - a markdown detail pane for the selected recording
//! - an action palette (paste/copy result, paste/copy raw, reveal on disk)
//! - loading and error empty-states driven by the provider snapshot

pub mod actions;
pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode};
pub use terminal::run;
