//! Initial page data reading.
//!
//! The host page carries a single JSON-encoded attribute of initial state.
//! No schema is enforced here; downstream code owns interpretation. An
//! absent or malformed attribute degrades to an empty object and is
//! logged, never raised past this boundary.

use gangway_core::PageDataError;
use serde_json::Value;

/// Parse the page-data attribute.
///
/// Distinguishes an absent attribute from a malformed one so the caller
/// can log accordingly; both degrade to the same default through
/// [`read`].
pub fn parse(attribute: Option<&str>) -> Result<Value, PageDataError> {
    let raw = attribute.ok_or(PageDataError::Missing)?;
    serde_json::from_str(raw).map_err(|err| PageDataError::Malformed(err.to_string()))
}

/// Read the page-data attribute, degrading to an empty object.
///
/// Emits one recoverable-failure log per failed read and never returns an
/// error: startup proceeds with empty state.
pub fn read(attribute: Option<&str>) -> Value {
    match parse(attribute) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "could not read initial page data, continuing with empty state");
            Value::Object(serde_json::Map::new())
        }
    }
}
