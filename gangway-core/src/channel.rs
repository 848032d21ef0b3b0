//! # Capability Layer (InboundPort / OutboundPort / PortTable)
//!
//! The raw channel surface a rendering application exposes.
//!
//! A port is a named, typed, asynchronous communication endpoint. Inbound
//! ports accept handler subscriptions; outbound ports accept payloads. The
//! [`PortTable`] is the application's registry of live ports, resolved by
//! name at access time.
//!
//! # Structural Resolution
//!
//! The set of valid channel names is owned by the application and is not
//! known to this layer in advance. Any string is a legal name to query;
//! only its presence on the table at resolution time determines success.
//! Tables are read-only from Gangway's perspective: queried and delegated
//! to, never mutated.

use crate::{handler::DynPortHandler, message::Message};

/// A live inbound channel accepting handler subscriptions.
///
/// Subscribed handlers are invoked by the application's own scheduler
/// whenever an inbound event arrives.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `InboundPort` for `{P}`",
    label = "missing `InboundPort` implementation",
    note = "Inbound ports must accept handler subscriptions for `{P}`."
)]
pub trait InboundPort<P: Message>: Send + Sync {
    /// Register a handler for events arriving on this port.
    fn subscribe(&self, handler: Box<dyn DynPortHandler<P>>);
}

/// A live outbound channel accepting payloads.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `OutboundPort` for `{P}`",
    label = "missing `OutboundPort` implementation",
    note = "Outbound ports must accept payloads of type `{P}`."
)]
pub trait OutboundPort<P: Message>: Send + Sync {
    /// Forward a payload into the application.
    fn send(&self, payload: P);
}

/// The raw channel registry exposed by a rendering application.
///
/// Resolution is per-name and per-capability: a channel may exist as
/// inbound, outbound, both, or neither, and the two lookups are
/// independent.
pub trait PortTable<P: Message>: Send + Sync {
    /// Resolve a live inbound channel by name.
    fn inbound(&self, name: &str) -> Option<&dyn InboundPort<P>>;

    /// Resolve a live outbound channel by name.
    fn outbound(&self, name: &str) -> Option<&dyn OutboundPort<P>>;
}
