//! Stream archive domain library.
//!
//! Pure domain logic with zero internal dependencies: the stream record
//! model, the listing filter predicate, derived filter vocabularies, and
//! the embed-URL transform. Used by both the table-store client and the
//! web layer.

pub mod embed;
pub mod error;
pub mod filter;
pub mod record;
pub mod types;
pub mod vocab;
