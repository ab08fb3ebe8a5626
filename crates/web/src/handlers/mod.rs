//! Request handlers for the archive views.
//!
//! Handlers fetch from the remote table store via [`archive_store`], run the
//! pure filter/vocabulary functions from [`archive_core`], and hand the
//! results to the renderer. Errors map to HTML pages via
//! [`crate::error::AppError`].

pub mod archive;
