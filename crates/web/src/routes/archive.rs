//! Route definitions for the archive views.

use axum::routing::get;
use axum::Router;

use crate::handlers::archive;
use crate::state::AppState;

/// Page routes mounted at the application root.
///
/// ```text
/// GET /              -> list_streams
/// GET /stream/{id}   -> stream_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(archive::list_streams))
        .route("/stream/{id}", get(archive::stream_detail))
}
