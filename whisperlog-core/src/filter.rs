//! Search filtering over the in-memory recording list
//!
//! Plain case-insensitive substring matching over the two transcription
//! text fields. Not tokenized, not fuzzy, and timestamps are deliberately
//! not searched. The filter is total: absent list, empty query, and any
//! query string all produce defined output.

use crate::recording::Recording;

/// Filter a recording list by a search query.
///
/// Returns the list unchanged when the query is empty, and passes an absent
/// list (still loading / not yet fetched) straight through. Otherwise keeps
/// every recording whose lowercased raw or LLM result contains the
/// lowercased query as a substring. Missing fields compare as empty strings,
/// so recordings with neither field are excluded by any non-empty query.
/// Relative order is preserved; no resort happens here.
pub fn filter_recordings(
    recordings: Option<&[Recording]>,
    query: &str,
) -> Option<Vec<Recording>> {
    let recordings = recordings?;
    if query.is_empty() {
        return Some(recordings.to_vec());
    }

    let query_lower = query.to_lowercase();
    Some(
        recordings
            .iter()
            .filter(|rec| matches_query(rec, &query_lower))
            .cloned()
            .collect(),
    )
}

/// Whether a recording matches an already-lowercased query
fn matches_query(recording: &Recording, query_lower: &str) -> bool {
    let raw = recording
        .meta
        .raw_result
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    let llm = recording
        .meta
        .llm_result
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    raw.contains(query_lower) || llm.contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingMeta;
    use chrono::{Local, TimeZone};

    fn rec(directory: &str, raw: Option<&str>, llm: Option<&str>) -> Recording {
        Recording {
            directory: directory.to_string(),
            timestamp: Local.with_ymd_and_hms(2024, 4, 5, 12, 0, 0).unwrap(),
            meta: RecordingMeta {
                raw_result: raw.map(String::from),
                llm_result: llm.map(String::from),
                ..Default::default()
            },
        }
    }

    fn dirs(filtered: &Option<Vec<Recording>>) -> Vec<&str> {
        filtered
            .as_ref()
            .unwrap()
            .iter()
            .map(|r| r.directory.as_str())
            .collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let list = vec![rec("a", Some("one"), None), rec("b", Some("two"), None)];
        let filtered = filter_recordings(Some(&list), "");
        assert_eq!(dirs(&filtered), vec!["a", "b"]);
    }

    #[test]
    fn test_absent_list_passthrough() {
        assert!(filter_recordings(None, "").is_none());
        assert!(filter_recordings(None, "anything").is_none());
    }

    #[test]
    fn test_case_insensitive_substring_on_either_field() {
        let list = vec![rec("a", Some("hello world"), Some("Hello, World!"))];
        // matches rawResult substring, case-insensitive
        let filtered = filter_recordings(Some(&list), "world");
        assert_eq!(dirs(&filtered), vec!["a"]);
        let filtered = filter_recordings(Some(&list), "WORLD");
        assert_eq!(dirs(&filtered), vec!["a"]);

        // matches only the LLM field
        let list = vec![rec("b", Some("plain"), Some("Refined output"))];
        let filtered = filter_recordings(Some(&list), "refined");
        assert_eq!(dirs(&filtered), vec!["b"]);
    }

    #[test]
    fn test_non_matching_entry_excluded() {
        let list = vec![rec("a", Some("foo bar"), None)];
        let filtered = filter_recordings(Some(&list), "baz");
        assert!(filtered.unwrap().is_empty());
    }

    #[test]
    fn test_missing_fields_excluded_by_nonempty_query() {
        let list = vec![rec("a", None, None)];
        let filtered = filter_recordings(Some(&list), "x");
        assert!(filtered.unwrap().is_empty());
        // ...but retained by the empty query
        let filtered = filter_recordings(Some(&list), "");
        assert_eq!(filtered.unwrap().len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let list = vec![
            rec("a", Some("match one"), None),
            rec("b", Some("no"), None),
            rec("c", Some("match two"), None),
            rec("d", Some("match three"), None),
        ];
        let filtered = filter_recordings(Some(&list), "match");
        assert_eq!(dirs(&filtered), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_timestamp_text_not_searched() {
        let list = vec![rec("1700000000000", Some("words"), None)];
        let filtered = filter_recordings(Some(&list), "2024");
        assert!(filtered.unwrap().is_empty());
    }
}
