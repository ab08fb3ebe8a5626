//! Query parameter types for the listing view.

use archive_core::filter::{BoolFilter, FilterCriteria};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

/// Raw filter criteria as they arrive on `GET /`.
///
/// All parameters are optional, and empty strings behave as unset so that
/// form submissions with blank controls round-trip cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub season: Option<String>,
    pub streamer: Option<String>,
    pub smp: Option<String>,
    pub subtitles: Option<String>,
    pub tag: Option<String>,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: Option<String>,
}

impl ListParams {
    /// Convert the raw parameters into domain criteria.
    ///
    /// A malformed `date` is rejected with a 400; every other parameter
    /// degrades to "no filter" (unknown `smp`/`subtitles` values mean
    /// "any").
    pub fn to_criteria(&self) -> Result<FilterCriteria, AppError> {
        let date = match non_empty(self.date.as_deref()) {
            None => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest(format!("Invalid date filter: {raw}"))
            })?),
        };

        Ok(FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            season: non_empty(self.season.as_deref()).map(str::to_string),
            streamer: non_empty(self.streamer.as_deref()).map(str::to_string),
            smp: self
                .smp
                .as_deref()
                .map(BoolFilter::from_param)
                .unwrap_or_default(),
            subtitles: self
                .subtitles
                .as_deref()
                .map(BoolFilter::from_param)
                .unwrap_or_default(),
            tag: non_empty(self.tag.as_deref()).map(str::to_string),
            date,
        })
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
