//! Derived filter vocabularies.
//!
//! The listing view populates its select controls from the collection it
//! just fetched. These are pure, stateless functions recomputed per render;
//! no incremental index is kept at the expected data scale. First-occurrence
//! order is preserved and empty or absent values are excluded.

use indexmap::IndexSet;

use crate::record::StreamRecord;

/// Distinct non-empty `season` values, in first-occurrence order.
pub fn seasons(records: &[StreamRecord]) -> Vec<String> {
    distinct(records.iter().filter_map(|r| r.season.as_deref()))
}

/// Distinct non-empty `streamer` values, in first-occurrence order.
pub fn streamers(records: &[StreamRecord]) -> Vec<String> {
    distinct(records.iter().filter_map(|r| r.streamer.as_deref()))
}

/// Distinct non-empty strings across all records' tag lists, in
/// first-occurrence order.
pub fn tags(records: &[StreamRecord]) -> Vec<String> {
    distinct(
        records
            .iter()
            .filter_map(|r| r.tags.as_deref())
            .flatten()
            .map(String::as_str),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: IndexSet<&str> = values.filter(|v| !v.is_empty()).collect();
    set.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
