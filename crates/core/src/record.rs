//! The stream record model.
//!
//! Records are owned by the remote table store; this system only reads
//! them. Field names match the store's `streams` table columns so the
//! struct deserializes directly from the store's JSON rows.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A single archived stream, as returned by the table store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Recording timestamp. Date filtering compares the calendar day only.
    pub date: Timestamp,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub streamer: Option<String>,
    #[serde(default)]
    pub smp: Option<bool>,
    #[serde(default)]
    pub subtitles: Option<bool>,
    /// Ordered tag list; order is display-relevant.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Watch URL; rewrite via [`crate::embed::to_embed_url`] before
    /// embedding.
    pub youtube_url: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
