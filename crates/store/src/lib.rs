//! Remote table-store client for the stream archive.
//!
//! The archive owns no database; records live in a hosted table store
//! reachable over HTTP (a PostgREST-style REST interface). This crate
//! exposes the two read operations the application needs and nothing else:
//! fetch the whole `streams` table, or fetch one row by id. There is no
//! write path, no retry, and no client-side cache.

mod client;
mod error;

pub use client::StreamStore;
pub use error::StoreError;
