//! Host-environment collaborators.
//!
//! The bootstrap layer reads three things from the execution environment:
//! a JSON-encoded page-data attribute, a raw cookie header, and viewport
//! metadata. [`HostPage`] abstracts that surface so the same bootstrap
//! runs against a real page binding or a fixed value in tests.

/// Viewport metadata, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

/// The page environment the bootstrap reads from.
pub trait HostPage: Send + Sync {
    /// The JSON-encoded initial-state attribute, if the server rendered
    /// one.
    fn page_attribute(&self) -> Option<String>;

    /// The raw cookie header.
    ///
    /// Re-read on every call: token refresh depends on seeing the cookie
    /// jar as it is now, not as it was at startup.
    fn cookie_header(&self) -> String;

    /// Viewport metadata.
    fn viewport(&self) -> Viewport;

    /// Identifier of the node the application mounts into.
    fn mount_point(&self) -> String {
        "app".to_owned()
    }
}

/// A fixed, value-backed host page.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    /// The page-data attribute value.
    pub page_attribute: Option<String>,
    /// The cookie header.
    pub cookie_header: String,
    /// Viewport metadata.
    pub viewport: Viewport,
}

impl HostPage for StaticPage {
    fn page_attribute(&self) -> Option<String> {
        self.page_attribute.clone()
    }

    fn cookie_header(&self) -> String {
        self.cookie_header.clone()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
