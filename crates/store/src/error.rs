use reqwest::StatusCode;

/// Errors surfaced by the table-store client.
///
/// Every failed fetch maps to exactly one variant; the caller decides
/// whether to surface it (error banner, error page) or fall back to an
/// empty working set. No variant triggers a retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store returned HTTP {status}")]
    Status { status: StatusCode },

    /// The response body did not decode as the expected row shape.
    #[error("Failed to decode store response: {0}")]
    Decode(#[source] reqwest::Error),
}
