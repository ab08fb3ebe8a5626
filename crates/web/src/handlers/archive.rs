//! Handlers for the listing and detail views.
//!
//! Each handler issues exactly one store request per render and works over
//! the immutable snapshot that request returned. A full reload therefore
//! always re-fetches from scratch; nothing is cached between requests.

use archive_core::error::CoreError;
use archive_core::filter::filter_records;
use archive_core::types::DbId;
use archive_core::vocab;
use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::render;
use crate::state::AppState;

/// GET /
///
/// Fetches the full stream collection, narrows it with the criteria from
/// the query string, and renders the card grid. The filter-option
/// vocabularies come from the unfiltered collection. A fetch failure
/// renders an error banner instead of the grid; the request is not
/// retried.
pub async fn list_streams(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let criteria = params.to_criteria()?;

    let (records, fetch_error) = match state.store.fetch_all().await {
        Ok(records) => (records, false),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch the stream collection");
            (Vec::new(), true)
        }
    };

    let streams = filter_records(&records, &criteria);
    let seasons = vocab::seasons(&records);
    let streamers = vocab::streamers(&records);
    let tags = vocab::tags(&records);

    let view = render::ListingView {
        params: &params,
        seasons: &seasons,
        streamers: &streamers,
        tags: &tags,
        streams: &streams,
        fetch_error,
    };

    Ok(Html(render::listing_page(&view)))
}

/// GET /stream/{id}
///
/// Fetches the single record for `id` and renders it. An absent record is
/// a 404 page; a store failure surfaces as an error page. Either way the
/// store is asked exactly once.
pub async fn stream_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let stream = state
        .store
        .fetch_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stream",
            id,
        }))?;

    Ok(Html(render::detail_page(&stream)))
}
