//! # gangway-core
//!
//! Core traits for the Gangway bootstrap and port-dispatch layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! rendering applications that expose a port table but don't need the full
//! `gangway-std` implementation.
//!
//! # Three-Layer Architecture
//!
//! Gangway sits between a server-driven host page and a rendering
//! application, and is built in three layers:
//!
//! ## Layer 1: Capabilities ([`InboundPort`], [`OutboundPort`], [`PortTable`])
//!
//! The raw channel surface a rendering application exposes. A port either
//! accepts subscriptions for inbound events or accepts outbound payloads;
//! a [`PortTable`] resolves a channel name to whichever capability exists.
//!
//! - **Structural**: any string is a legal channel name to query
//! - **Read-only**: this layer never mutates the table, only resolves against it
//!
//! ## Layer 2: Handlers ([`PortHandler`])
//!
//! The unit of inbound event processing. Handlers are invoked by the
//! application's own scheduler whenever an inbound event arrives; this
//! layer never schedules invocation itself.
//!
//! ## Layer 3: Reporting ([`Reporter`], [`Diagnostic`])
//!
//! Every failed resolution or handler failure becomes a [`Diagnostic`]
//! routed through a [`Reporter`]. Reporters are infallible by signature:
//! a reporter that cannot deliver swallows the failure.
//!
//! # Error Types
//!
//! - [`PageDataError`] - why initial page data could not be read (logging only)
//! - [`BootError`] - the one fatal bootstrap path

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod channel;
mod diagnostic;
mod error;
mod handler;
mod message;

// Re-exports
pub use channel::{InboundPort, OutboundPort, PortTable};
pub use diagnostic::{ChannelOp, Diagnostic, NullReporter, Reporter};
pub use error::{BootError, BoxError, PageDataError};
pub use handler::{DynPortHandler, PortHandler};
pub use message::Message;
