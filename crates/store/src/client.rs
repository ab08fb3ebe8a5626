//! HTTP client for the hosted `streams` table.

use archive_core::record::StreamRecord;
use archive_core::types::DbId;

use crate::error::StoreError;

/// Name of the hosted table holding stream records.
const STREAMS_TABLE: &str = "streams";

/// Read-only client for the remote stream table.
///
/// Cheaply cloneable; the inner `reqwest::Client` is an Arc-backed
/// connection pool.
#[derive(Debug, Clone)]
pub struct StreamStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StreamStore {
    /// Create a client for the table store at `base_url`
    /// (e.g. `https://tables.example.com`, no trailing slash required).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{STREAMS_TABLE}", self.base_url)
    }

    /// Fetch the entire stream collection in one request.
    ///
    /// No retry and no pagination: the working set is small, and every
    /// listing render re-fetches from scratch.
    pub async fn fetch_all(&self) -> Result<Vec<StreamRecord>, StoreError> {
        let response = self
            .http
            .get(self.table_url())
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = check_status(response)?;
        response
            .json::<Vec<StreamRecord>>()
            .await
            .map_err(StoreError::Decode)
    }

    /// Fetch the single record with the given identifier.
    ///
    /// Returns `Ok(None)` when no row matches. The requested identifier is
    /// checked again at resolution time: a row whose id differs from the
    /// one asked for is discarded, so a response can never be applied to
    /// the wrong view.
    pub async fn fetch_by_id(&self, id: DbId) -> Result<Option<StreamRecord>, StoreError> {
        let id_filter = format!("eq.{id}");
        let response = self
            .http
            .get(self.table_url())
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = check_status(response)?;
        let rows = response
            .json::<Vec<StreamRecord>>()
            .await
            .map_err(StoreError::Decode)?;

        match rows.into_iter().next() {
            Some(record) if record.id == id => Ok(Some(record)),
            Some(record) => {
                tracing::warn!(
                    requested = id,
                    received = record.id,
                    "Discarding store response for a different record"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status { status })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
