//! Recordings provider
//!
//! Scans the recordings directory (one subdirectory per recording, each
//! holding a `meta.json`) and exposes the result to the view as a
//! `Snapshot { recordings, is_loading, error }`. The scan runs on a
//! background thread so the UI can draw a loading state; the view only
//! observes the snapshot and never retries or cancels the fetch.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use crate::error::{HistoryError, Result};
use crate::recording::{Recording, RecordingMeta};

/// What the view observes: the three provider outputs.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Absent until the first scan resolves
    pub recordings: Option<Vec<Recording>>,
    pub is_loading: bool,
    pub error: Option<HistoryError>,
}

/// Scan a recordings directory synchronously.
///
/// Every immediate subdirectory with a parseable `meta.json` becomes one
/// recording; entries that fail to load are skipped with a warning so one
/// bad recording never fails the listing. Results are sorted newest-first.
pub fn scan_recordings(dir: &Path) -> Result<Vec<Recording>> {
    if !dir.is_dir() {
        return Err(HistoryError::path_not_found(dir));
    }

    let mut recordings = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable directory entry: {err}");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match load_recording(&path) {
            Ok(Some(recording)) => recordings.push(recording),
            Ok(None) => {} // no meta.json; not a recording
            Err(err) => warn!("skipping recording at {:?}: {err}", path),
        }
    }

    recordings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    debug!("scanned {} recordings from {:?}", recordings.len(), dir);
    Ok(recordings)
}

/// Load a single recording from its directory, or `None` when the directory
/// holds no `meta.json`.
fn load_recording(path: &Path) -> Result<Option<Recording>> {
    let meta_path = path.join("meta.json");
    if !meta_path.is_file() {
        return Ok(None);
    }

    let directory = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = fs::read_to_string(&meta_path)?;
    let meta: RecordingMeta = serde_json::from_str(&content)
        .map_err(|err| HistoryError::meta(meta_path.display().to_string(), err))?;

    Recording::from_parts(directory, meta).map(Some)
}

/// Spawns the scan on a background thread.
pub struct RecordingsProvider;

impl RecordingsProvider {
    /// Start a scan of `dir` and return a handle the UI loop can poll.
    pub fn spawn(dir: PathBuf) -> ProviderHandle {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // Receiver dropped means the UI quit before the scan finished
            let _ = tx.send(scan_recordings(&dir));
        });
        ProviderHandle {
            rx,
            snapshot: Snapshot {
                recordings: None,
                is_loading: true,
                error: None,
            },
        }
    }
}

/// Handle to an in-flight (or completed) scan.
pub struct ProviderHandle {
    rx: Receiver<Result<Vec<Recording>>>,
    snapshot: Snapshot,
}

impl ProviderHandle {
    /// Fold any completed scan result into the snapshot. Returns `true`
    /// when the snapshot changed so the caller can recompute derived state.
    pub fn poll(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(Ok(recordings)) => {
                self.snapshot = Snapshot {
                    recordings: Some(recordings),
                    is_loading: false,
                    error: None,
                };
                true
            }
            Ok(Err(err)) => {
                self.snapshot = Snapshot {
                    recordings: None,
                    is_loading: false,
                    error: Some(err),
                };
                true
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn write_recording(root: &Path, name: &str, meta_json: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("meta.json"), meta_json).unwrap();
    }

    #[test]
    fn test_scan_returns_recordings_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        write_recording(
            tmp.path(),
            "older",
            r#"{"datetime":"2024-01-01T10:00:00+00:00","rawResult":"first"}"#,
        );
        write_recording(
            tmp.path(),
            "newer",
            r#"{"datetime":"2024-06-01T10:00:00+00:00","rawResult":"second"}"#,
        );

        let recordings = scan_recordings(tmp.path()).unwrap();
        assert_eq!(recordings.len(), 2);
        assert_eq!(recordings[0].directory, "newer");
        assert_eq!(recordings[1].directory, "older");
    }

    #[test]
    fn test_scan_skips_bad_entries() {
        let tmp = tempfile::tempdir().unwrap();
        write_recording(
            tmp.path(),
            "good",
            r#"{"datetime":"2024-01-01T10:00:00+00:00","rawResult":"ok"}"#,
        );
        write_recording(tmp.path(), "broken", "not json at all");
        // Directory without meta.json is not a recording
        fs::create_dir_all(tmp.path().join("empty")).unwrap();
        // Stray file at the top level is ignored
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let recordings = scan_recordings(tmp.path()).unwrap();
        assert_eq!(recordings.len(), 1);
        assert_eq!(recordings[0].directory, "good");
    }

    #[test]
    fn test_scan_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = scan_recordings(&missing).unwrap_err();
        assert!(matches!(err, HistoryError::PathNotFound { .. }));
    }

    #[test]
    fn test_provider_handle_resolves() {
        let tmp = tempfile::tempdir().unwrap();
        write_recording(
            tmp.path(),
            "1712320496000",
            r#"{"rawResult":"hello"}"#,
        );

        let mut handle = RecordingsProvider::spawn(tmp.path().to_path_buf());
        assert!(handle.snapshot().is_loading);

        // Poll until the background scan lands
        let mut changed = false;
        for _ in 0..100 {
            if handle.poll() {
                changed = true;
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(changed);

        let snapshot = handle.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.recordings.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_provider_handle_surfaces_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut handle = RecordingsProvider::spawn(tmp.path().join("missing"));
        for _ in 0..100 {
            if handle.poll() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        let snapshot = handle.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.recordings.is_none());
        assert!(snapshot.error.is_some());
    }
}
