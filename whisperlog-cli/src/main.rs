//! whisperlog - browse and search speech-to-text transcription history
//!
//! Lists previously recorded transcriptions from the recordings directory,
//! filters them live by a case-insensitive substring search over the raw
//! and LLM-refined text, and offers paste / copy / reveal actions per entry.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use whisperlog_core::{filter_recordings, scan_recordings, Config};

mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "whisperlog",
    author,
    version,
    about = "Search your speech-to-text transcription history",
    long_about = "Browse previously recorded transcriptions in a terminal UI. \
                  Filter live by substring search over the raw and LLM-refined \
                  text, then paste, copy, or reveal the recording on disk."
)]
struct Cli {
    /// Recordings base directory (overrides ~/.whisperlog/config.toml)
    #[arg(long, value_name = "DIR", env = "WHISPERLOG_RECORDINGS_DIR")]
    recordings_dir: Option<PathBuf>,

    /// Start with this search query already applied
    #[arg(long, short = 'q', value_name = "TEXT")]
    query: Option<String>,

    /// Print matching recordings to stdout and exit (no TUI)
    #[arg(long)]
    list: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    let config =
        Config::resolve(cli.recordings_dir).context("failed to resolve configuration")?;

    if cli.list {
        return run_list(&config, cli.query.as_deref().unwrap_or(""));
    }

    // The TUI hands back text when a paste action was chosen; printing it
    // after the terminal is restored is the terminal equivalent of the
    // launcher paste primitive.
    if let Some(text) = tui::run(config, cli.query.unwrap_or_default())? {
        println!("{text}");
    }
    Ok(())
}

/// Non-interactive mode: scan, filter, print one line per recording.
fn run_list(config: &Config, query: &str) -> Result<()> {
    let recordings = scan_recordings(&config.recordings_dir)
        .context("failed to scan recordings directory")?;
    let filtered = filter_recordings(Some(&recordings), query).unwrap_or_default();

    for recording in &filtered {
        let text = recording.primary_text();
        // Keep each entry on one line for script consumption
        println!("{}\t{}", recording.title(), text.replace('\n', " "));
    }
    Ok(())
}
