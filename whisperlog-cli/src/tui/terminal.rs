//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use whisperlog_core::{Config, ProviderHandle, RecordingsProvider};

use super::actions;
use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI. Returns the text a paste action selected, if any, so the
/// caller can print it once the terminal is back to normal.
pub fn run(config: Config, initial_query: String) -> Result<Option<String>> {
    let mut terminal = init_terminal()?;

    // Kick off the recordings fetch; the loop only observes its snapshot
    let provider = RecordingsProvider::spawn(config.recordings_dir.clone());
    let mut app = App::new(config, initial_query);

    let result = run_loop(&mut terminal, &mut app, provider);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result.map(|()| app.pending_output.take())
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut provider: ProviderHandle,
) -> Result<()> {
    loop {
        // Fold any completed fetch into the view state
        if provider.poll() {
            app.apply_snapshot(provider.snapshot());
        }

        // Render UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::ExecuteAction(action_id) => {
                        actions::execute_action(app, &action_id);
                    }
                    HandleResult::Refresh => {
                        provider =
                            RecordingsProvider::spawn(app.config.recordings_dir.clone());
                        app.is_loading = true;
                        app.clear_status();
                    }
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }

        // Check if we should quit (paste actions set this)
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
