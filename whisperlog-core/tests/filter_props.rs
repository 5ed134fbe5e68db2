use chrono::{Local, TimeZone};
use proptest::prelude::*;
use whisperlog_core::filter::filter_recordings;
use whisperlog_core::recording::{Recording, RecordingMeta};

// Strategy to generate recordings with arbitrary optional text fields
fn arb_recording(index: usize) -> impl Strategy<Value = Recording> {
    (
        proptest::option::of(".{0,40}"),
        proptest::option::of(".{0,40}"),
    )
        .prop_map(move |(raw, llm)| Recording {
            directory: format!("rec-{index}"),
            timestamp: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            meta: RecordingMeta {
                raw_result: raw,
                llm_result: llm,
                ..Default::default()
            },
        })
}

fn arb_recordings() -> impl Strategy<Value = Vec<Recording>> {
    (0usize..20).prop_flat_map(|len| (0..len).map(arb_recording).collect::<Vec<_>>())
}

proptest! {
    /// Property: the empty query is the identity filter
    #[test]
    fn prop_empty_query_identity(recordings in arb_recordings()) {
        let filtered = filter_recordings(Some(&recordings), "").unwrap();
        let before: Vec<_> = recordings.iter().map(|r| r.directory.clone()).collect();
        let after: Vec<_> = filtered.iter().map(|r| r.directory.clone()).collect();
        prop_assert_eq!(before, after);
    }

    /// Property: the filter never invents entries and preserves order
    #[test]
    fn prop_subset_and_order(recordings in arb_recordings(), query in ".{0,10}") {
        let filtered = filter_recordings(Some(&recordings), &query).unwrap();

        let source: Vec<_> = recordings.iter().map(|r| r.directory.clone()).collect();
        let mut cursor = 0usize;
        for rec in &filtered {
            // Each filtered entry appears in the source, at or after the
            // position of the previous one (order-preserving subset)
            let pos = source[cursor..]
                .iter()
                .position(|d| d == &rec.directory)
                .map(|p| p + cursor);
            prop_assert!(pos.is_some());
            cursor = pos.unwrap() + 1;
        }
    }

    /// Property: a recording containing the query (case-insensitive) in
    /// either field is retained
    #[test]
    fn prop_substring_match_retained(
        prefix in ".{0,10}",
        needle in "[a-z]{1,8}",
        suffix in ".{0,10}",
    ) {
        let rec = Recording {
            directory: "only".to_string(),
            timestamp: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            meta: RecordingMeta {
                raw_result: Some(format!("{prefix}{needle}{suffix}")),
                llm_result: None,
                ..Default::default()
            },
        };
        let filtered = filter_recordings(Some(&[rec]), &needle.to_uppercase()).unwrap();
        prop_assert_eq!(filtered.len(), 1);
    }

    /// Property: recordings with neither field are excluded by any
    /// non-empty query
    #[test]
    fn prop_empty_fields_excluded(query in ".{1,10}") {
        let rec = Recording {
            directory: "bare".to_string(),
            timestamp: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            meta: RecordingMeta::default(),
        };
        let filtered = filter_recordings(Some(&[rec]), &query).unwrap();
        prop_assert!(filtered.is_empty());
    }
}
