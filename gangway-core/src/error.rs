//! Error types for Gangway.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PageDataError`] - why initial page data could not be read
//! - [`BootError`] - fatal bootstrap errors
//!
//! Nothing in this layer is fatal to startup except [`BootError`]: page
//! data and token failures degrade to defaults, missing channels degrade
//! to no-ops plus a diagnostic.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why the initial page data could not be read.
///
/// Carried for logging only. Readers degrade to an empty default value;
/// this error never propagates past the read boundary.
#[derive(Error, Debug)]
pub enum PageDataError {
    /// The page-data attribute was not present on the host page.
    #[error("page data attribute is absent")]
    Missing,

    /// The attribute was present but did not parse as JSON.
    #[error("page data is not valid JSON: {0}")]
    Malformed(String),
}

/// Fatal bootstrap errors.
///
/// The only fatal path is the application factory itself failing; every
/// other step degrades to a default value or a diagnostic.
#[derive(Error, Debug)]
pub enum BootError {
    /// The rendering application factory returned an error.
    #[error("rendering application failed to initialize")]
    Application(#[source] BoxError),
}
