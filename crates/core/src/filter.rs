//! Listing filter criteria and the conjunctive match predicate.
//!
//! A record is included iff ALL seven criteria hold. Filtering is a pure
//! function over an immutable snapshot of the collection; the web layer
//! builds a fresh [`FilterCriteria`] per request and never mutates records
//! in place.

use chrono::NaiveDate;

use crate::record::StreamRecord;

// ---------------------------------------------------------------------------
// Criteria types
// ---------------------------------------------------------------------------

/// One-sided boolean filter: either "any value" or "must be true".
///
/// There is deliberately no way to select `false` -- the listing UI only
/// offers "all" and "yes".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolFilter {
    #[default]
    Any,
    Yes,
}

impl BoolFilter {
    /// Parse a query-parameter value.
    ///
    /// `"yes"` selects the one-sided filter; anything else (including the
    /// empty string) means "any".
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_core::filter::BoolFilter;
    /// assert_eq!(BoolFilter::from_param("yes"), BoolFilter::Yes);
    /// assert_eq!(BoolFilter::from_param(""), BoolFilter::Any);
    /// assert_eq!(BoolFilter::from_param("no"), BoolFilter::Any);
    /// ```
    pub fn from_param(value: &str) -> Self {
        if value == "yes" {
            Self::Yes
        } else {
            Self::Any
        }
    }
}

/// The seven independent listing criteria. `Default` matches everything.
///
/// Exact-match fields (`season`, `streamer`, `tag`) are case-sensitive;
/// only the free-text `search` is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against title and
    /// description. Empty matches everything.
    pub search: String,
    /// Exact season match when set.
    pub season: Option<String>,
    /// Exact streamer match when set.
    pub streamer: Option<String>,
    pub smp: BoolFilter,
    pub subtitles: BoolFilter,
    /// The record's tag list must contain this exact string when set.
    pub tag: Option<String>,
    /// Calendar-day match when set; time-of-day is ignored.
    pub date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

impl FilterCriteria {
    /// The conjunctive predicate: true iff the record satisfies all seven
    /// criteria.
    pub fn matches(&self, record: &StreamRecord) -> bool {
        self.matches_search(record)
            && matches_exact(self.season.as_deref(), record.season.as_deref())
            && matches_exact(self.streamer.as_deref(), record.streamer.as_deref())
            && matches_flag(self.smp, record.smp)
            && matches_flag(self.subtitles, record.subtitles)
            && self.matches_tag(record)
            && self.matches_date(record)
    }

    fn matches_search(&self, record: &StreamRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_tag(&self, record: &StreamRecord) -> bool {
        match self.tag.as_deref() {
            None => true,
            Some(tag) => record
                .tags
                .as_deref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag)),
        }
    }

    fn matches_date(&self, record: &StreamRecord) -> bool {
        match self.date {
            None => true,
            Some(day) => record.date.date_naive() == day,
        }
    }
}

/// Unset matches everything; set requires the record to carry exactly that
/// value. A record without the field never matches a set filter.
fn matches_exact(selected: Option<&str>, actual: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(value) => actual == Some(value),
    }
}

fn matches_flag(filter: BoolFilter, actual: Option<bool>) -> bool {
    match filter {
        BoolFilter::Any => true,
        BoolFilter::Yes => actual == Some(true),
    }
}

/// Apply the conjunctive predicate to a snapshot of the collection.
///
/// Pure: input order is preserved, the collection is never mutated, and
/// re-running with the same inputs yields identical output.
pub fn filter_records<'a>(
    records: &'a [StreamRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a StreamRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
