use archive_core::error::CoreError;
use archive_store::StoreError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for table-store
/// failures. Implements [`IntoResponse`] to produce consistent HTML error
/// pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `archive_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A table-store error from `archive_store`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Table-store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Table store request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "The stream archive is currently unavailable".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Html(render::error_page(status, &message))).into_response()
    }
}
