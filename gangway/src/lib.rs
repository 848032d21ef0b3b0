//! # gangway - Safe Bootstrap and Port Dispatch
//!
//! `gangway` connects a server-driven page (initial state in a DOM
//! attribute, a token in a cookie) to a rendering application that
//! exposes named, typed, asynchronous message channels ("ports").
//!
//! The centerpiece is the **dispatch safety layer** ([`SafePorts`]): a
//! wrapper over the application's channel registry that tolerates
//! channels the application chose not to register, routes failures to
//! environment-appropriate reporting, and keeps the call-site API stable
//! regardless of which channels exist.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gangway::{boot, BootConfig, EnvReporter, NullSink, ReporterConfig};
//! use std::sync::Arc;
//!
//! let reporter = Arc::new(EnvReporter::new(ReporterConfig::default(), NullSink));
//! let booted = boot(host, BootConfig::default(), reporter, |inputs| {
//!     MyApp::mount(inputs)
//! })?;
//!
//! booted.ports.port("token-refreshed").send("abc".into());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod event;
pub mod host;

// Core traits and types
pub use gangway_core::{
    // Errors
    BootError,
    BoxError,
    // Reporting
    ChannelOp,
    Diagnostic,
    // Handlers
    DynPortHandler,
    // Capabilities
    InboundPort,
    // Message
    Message,
    NullReporter,
    OutboundPort,
    PageDataError,
    PortHandler,
    PortTable,
    Reporter,
};

// Standard implementations
pub use gangway_std::ports::{Port, SafePorts};
pub use gangway_std::report::{
    EnvReporter, Environment, NullSink, ReporterConfig, SinkError, TelemetrySink,
};
pub use gangway_std::table::{
    DeliveryMode, MemoryInbound, MemoryOutbound, MemoryPorts, MemoryPortsBuilder,
};
pub use gangway_std::{cookie, page};

// Bootstrap surface
pub use bootstrap::{
    AppInputs, Application, BootConfig, BootContext, Booted, DEFAULT_TOKEN_COOKIE, boot, channels,
};
pub use event::{DecodeErrorReport, NavigationErrorReport, PortEvent};
pub use host::{HostPage, StaticPage, Viewport};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use gangway_std::testing::*;
}

/// Prelude module - common imports for Gangway.
///
/// # Usage
///
/// ```rust,ignore
/// use gangway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AppInputs,
        Application,
        BootConfig,
        // Errors
        BoxError,
        ChannelOp,
        Diagnostic,
        // Host surface
        HostPage,
        // Core traits
        Message,
        PortEvent,
        PortHandler,
        PortTable,
        Reporter,
        // Safety layer
        SafePorts,
        Viewport,
        // Bootstrap
        boot,
    };
}
