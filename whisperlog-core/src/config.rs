//! Configuration
//!
//! One preference matters here: the recordings base directory. It is read
//! once at startup and used to locate the scan root and to build the
//! reveal-in-file-browser path.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, Result};

/// Relative default under the home directory
const DEFAULT_RECORDINGS_DIR: &str = "Documents/superwhisper/recordings";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub recordings_dir: PathBuf,
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// Precedence: explicit override (CLI flag / env) > config file >
    /// built-in default.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self {
                recordings_dir: expand_home(dir),
            });
        }

        let config_path = Self::config_path();
        if config_path.is_file() {
            return Self::load_from(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a TOML file
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|err| {
            HistoryError::config(format!("invalid TOML in {:?}: {err}", path))
        })?;
        Ok(Self {
            recordings_dir: expand_home(config.recordings_dir),
        })
    }

    /// Config file path: `~/.whisperlog/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".whisperlog/config.toml")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recordings_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_RECORDINGS_DIR),
        }
    }
}

/// Expand a leading `~` or `${HOME}` in a path
fn expand_home(path: PathBuf) -> PathBuf {
    let raw = path.display().to_string();
    let home = dirs::home_dir()
        .map(|h| h.display().to_string())
        .or_else(|| env::var("HOME").ok())
        .unwrap_or_default();

    if let Some(rest) = raw.strip_prefix("~/") {
        return PathBuf::from(home).join(rest);
    }
    if raw.contains("${HOME}") {
        return PathBuf::from(raw.replace("${HOME}", &home));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/recs"))).unwrap();
        assert_eq!(config.recordings_dir, PathBuf::from("/tmp/recs"));
    }

    #[test]
    fn test_default_under_home() {
        let config = Config::default();
        assert!(config
            .recordings_dir
            .ends_with("Documents/superwhisper/recordings"));
    }

    #[test]
    fn test_load_from_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, r#"recordings_dir = "/data/recordings""#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.recordings_dir, PathBuf::from("/data/recordings"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "recordings_dir = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, HistoryError::Config { .. }));
    }

    #[test]
    fn test_tilde_expansion() {
        let expanded = expand_home(PathBuf::from("~/recordings"));
        assert!(!expanded.display().to_string().starts_with('~'));
        assert!(expanded.ends_with("recordings"));
    }
}
