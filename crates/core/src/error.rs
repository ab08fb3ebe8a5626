use crate::types::DbId;

/// Domain-level error type.
///
/// Carried across crate boundaries so the web layer can map each variant to
/// an HTTP status without string matching.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record that was asked for does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// User-supplied input was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
