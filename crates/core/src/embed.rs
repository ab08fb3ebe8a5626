//! Embeddable-media URL derivation.

/// Path marker of a watch URL.
const WATCH_MARKER: &str = "watch?v=";

/// Path marker of the embeddable player URL.
const EMBED_MARKER: &str = "embed/";

/// Rewrite a watch URL into its embeddable form.
///
/// Replaces the first `watch?v=` occurrence with `embed/`. A URL without
/// the marker is returned unchanged; the embed frame will simply fail to
/// load in that case.
///
/// # Examples
///
/// ```
/// use archive_core::embed::to_embed_url;
/// assert_eq!(
///     to_embed_url("https://youtube.com/watch?v=abc123"),
///     "https://youtube.com/embed/abc123"
/// );
/// ```
pub fn to_embed_url(url: &str) -> String {
    url.replacen(WATCH_MARKER, EMBED_MARKER, 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
