//! Per-recording actions and their dispatch
//!
//! The action set mirrors the launcher command this tool grew out of:
//! paste/copy the primary text (LLM result when present, raw otherwise),
//! paste/copy the raw text when an LLM result exists, and reveal the
//! recording directory in the platform file browser. Paste in a terminal
//! host means: leave the TUI and write the text to stdout.

use std::path::Path;
use std::process::Command;

use tracing::warn;
use whisperlog_core::Recording;

use super::app::{ActionItem, App};

pub const PASTE_RESULT: &str = "paste_result";
pub const COPY_RESULT: &str = "copy_result";
pub const PASTE_RAW: &str = "paste_raw";
pub const COPY_RAW: &str = "copy_raw";
pub const REVEAL: &str = "reveal";

/// Actions available for one recording. The raw-text variants only appear
/// when an LLM result exists, so the primary and raw actions are distinct.
pub fn available_actions(recording: &Recording) -> Vec<ActionItem> {
    let mut actions = vec![
        ActionItem {
            id: PASTE_RESULT.to_string(),
            name: "Paste Result".to_string(),
            shortcut: Some("Enter".to_string()),
            description: "Print the result to stdout on exit".to_string(),
        },
        ActionItem {
            id: COPY_RESULT.to_string(),
            name: "Copy Result".to_string(),
            shortcut: Some("c".to_string()),
            description: "Copy the result to the clipboard".to_string(),
        },
    ];

    if recording.has_llm_result() {
        actions.push(ActionItem {
            id: PASTE_RAW.to_string(),
            name: "Paste Raw Result".to_string(),
            shortcut: Some("P".to_string()),
            description: "Print the unedited transcription on exit".to_string(),
        });
        actions.push(ActionItem {
            id: COPY_RAW.to_string(),
            name: "Copy Raw Result".to_string(),
            shortcut: Some("C".to_string()),
            description: "Copy the unedited transcription".to_string(),
        });
    }

    actions.push(ActionItem {
        id: REVEAL.to_string(),
        name: "Reveal in File Browser".to_string(),
        shortcut: Some("o".to_string()),
        description: "Open the recording directory".to_string(),
    });

    actions
}

/// Execute an action against the current selection
pub fn execute_action(app: &mut App, action_id: &str) {
    let Some(recording) = app.selected_recording() else {
        return;
    };
    let primary = recording.primary_text().to_string();
    let raw = recording.raw_text().to_string();
    let reveal_path = app.config.recordings_dir.join(&recording.directory);

    match action_id {
        PASTE_RESULT => {
            app.pending_output = Some(primary);
            app.should_quit = true;
        }
        PASTE_RAW => {
            app.pending_output = Some(raw);
            app.should_quit = true;
        }
        COPY_RESULT => copy_to_clipboard(app, primary, "result"),
        COPY_RAW => copy_to_clipboard(app, raw, "raw result"),
        REVEAL => {
            // Fire-and-forget; the opener owns any failure past spawn
            match reveal_in_file_browser(&reveal_path) {
                Ok(()) => app.set_status(format!("Revealed {}", reveal_path.display())),
                Err(err) => {
                    warn!("reveal failed for {:?}: {err}", reveal_path);
                    app.set_status(format!("Could not reveal: {err}"));
                }
            }
        }
        _ => {
            app.set_status(format!("Unknown action: {action_id}"));
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String, what: &str) {
    match cli_clipboard::set_contents(text) {
        Ok(()) => app.set_status(format!("Copied {what} to clipboard")),
        Err(err) => app.set_status(format!("Clipboard error: {err}")),
    }
}

/// Open the recording directory in the platform file browser
#[cfg(target_os = "macos")]
fn reveal_in_file_browser(path: &Path) -> std::io::Result<()> {
    Command::new("open").arg("-R").arg(path).spawn()?;
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn reveal_in_file_browser(path: &Path) -> std::io::Result<()> {
    Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}
