//! Recording data model
//!
//! A recording is one captured transcription: a directory on disk holding a
//! `meta.json` with the raw transcription text and, optionally, a
//! post-processed (language-model refined) version.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, Result};

/// Per-recording metadata as stored in `meta.json`.
///
/// All fields are optional; unknown fields are ignored so newer metadata
/// formats keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordingMeta {
    /// Capture time, RFC 3339
    pub datetime: Option<String>,
    /// Unedited transcription text
    pub raw_result: Option<String>,
    /// Post-processed transcription, when an LLM pass ran
    pub llm_result: Option<String>,
    /// Recording length in seconds
    pub duration: Option<f64>,
    /// BCP-47 language code
    pub language_code: Option<String>,
}

/// One recorded transcription, read-only once produced by the provider.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Directory name under the recordings dir; unique, stable, used as the
    /// list key and filesystem join target
    pub directory: String,
    /// Resolved capture time (display only; the view never resorts)
    pub timestamp: DateTime<Local>,
    pub meta: RecordingMeta,
}

impl Recording {
    /// Build a recording from its directory name and parsed metadata,
    /// resolving the timestamp from `meta.datetime` (RFC 3339) or, failing
    /// that, from the directory name as epoch milliseconds.
    pub fn from_parts(directory: String, meta: RecordingMeta) -> Result<Self> {
        let timestamp = resolve_timestamp(&directory, &meta)?;
        Ok(Self {
            directory,
            timestamp,
            meta,
        })
    }

    /// List row title: `yyyy/MM/dd HH:mm:ss`
    pub fn title(&self) -> String {
        self.timestamp.format("%Y/%m/%d %H:%M:%S").to_string()
    }

    /// Text used by the primary paste/copy actions: the LLM result when
    /// present and non-empty, else the raw result.
    pub fn primary_text(&self) -> &str {
        match self.meta.llm_result.as_deref() {
            Some(llm) if !llm.is_empty() => llm,
            _ => self.raw_text(),
        }
    }

    /// Raw transcription text, empty string when absent
    pub fn raw_text(&self) -> &str {
        self.meta.raw_result.as_deref().unwrap_or("")
    }

    /// Whether a non-empty LLM result is present (controls the extra
    /// paste/copy-raw actions and the LLM detail section)
    pub fn has_llm_result(&self) -> bool {
        self.meta
            .llm_result
            .as_deref()
            .is_some_and(|s| !s.is_empty())
    }

    /// Markdown body for the detail pane: a "Raw Result" section always, an
    /// "LLM Result" section only when one exists.
    pub fn detail_markdown(&self) -> String {
        let mut md = format!("### Raw Result\n{}\n", self.raw_text());
        if self.has_llm_result() {
            md.push_str(&format!(
                "\n### LLM Result\n{}\n",
                self.meta.llm_result.as_deref().unwrap_or("")
            ));
        }
        if let Some(duration) = self.meta.duration {
            md.push_str(&format!("\n_Duration: {:.1}s_\n", duration));
        }
        md
    }
}

/// Resolve a recording timestamp: RFC 3339 `datetime` from the metadata
/// wins; otherwise the directory name is tried as epoch milliseconds.
fn resolve_timestamp(directory: &str, meta: &RecordingMeta) -> Result<DateTime<Local>> {
    if let Some(datetime) = meta.datetime.as_deref() {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime) {
            return Ok(parsed.with_timezone(&Local));
        }
    }

    if let Ok(millis) = directory.parse::<i64>() {
        if let Some(ts) = Local.timestamp_millis_opt(millis).single() {
            return Ok(ts);
        }
    }

    Err(HistoryError::invalid_timestamp(
        meta.datetime.as_deref().unwrap_or(directory),
        "expected RFC 3339 datetime or epoch-millisecond directory name",
    ))
}
