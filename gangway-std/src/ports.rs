//! # Dispatch Safety Layer (SafePorts)
//!
//! A wrapper over the raw [`PortTable`] a rendering application exposes.
//! For every requested channel name and operation it resolves to the real
//! channel when one exists, and to a no-op plus one [`Diagnostic`] when it
//! does not. The accessor shape is uniform regardless of which channels
//! exist, so call sites never need existence checks.
//!
//! # Resolution Semantics
//!
//! - **Lazy and per-access**: nothing is resolved until a port is used,
//!   and nothing is cached. Channels never become available after the
//!   table is constructed, so a channel missing at one access is missing
//!   at every access.
//! - **Structural**: any string is a legal channel name; only its
//!   presence on the table at resolution time determines success.
//! - **Never fatal**: a missing channel degrades to a no-op plus one
//!   diagnostic per access attempt, not deduplicated across calls.
//!
//! [`PortTable`]: gangway_core::PortTable
//! [`Diagnostic`]: gangway_core::Diagnostic

use gangway_core::{
    BoxError, ChannelOp, Diagnostic, Message, PortHandler, PortTable, Reporter,
};
use std::sync::Arc;

/// The dispatch safety layer over a rendering application's port table.
///
/// Holds no state beyond the table and reporter references captured at
/// wrap time; it is a pure resolution layer, not a cache.
pub struct SafePorts<P: Message> {
    table: Arc<dyn PortTable<P>>,
    reporter: Arc<dyn Reporter>,
}

impl<P: Message> Clone for SafePorts<P> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

impl<P: Message> SafePorts<P> {
    /// Wrap a raw port table, routing failures through `reporter`.
    pub fn wrap(table: Arc<dyn PortTable<P>>, reporter: Arc<dyn Reporter>) -> Self {
        Self { table, reporter }
    }

    /// Access the port named `name`.
    ///
    /// Always succeeds: the returned accessor has the same shape whether
    /// or not the channel exists, and resolution happens inside each
    /// operation.
    pub fn port<'a>(&'a self, name: &'a str) -> Port<'a, P> {
        Port { ports: self, name }
    }
}

/// A uniform accessor for one named port.
///
/// Produced by [`SafePorts::port`] for any name; each operation resolves
/// the channel independently.
pub struct Port<'a, P: Message> {
    ports: &'a SafePorts<P>,
    name: &'a str,
}

impl<P: Message> Port<'_, P> {
    /// Register `handler` for inbound events on this port.
    ///
    /// When the channel is live, the handler is attached with its
    /// failures routed through the reporter. When it is not, one
    /// diagnostic is emitted and the handler is silently discarded.
    pub fn subscribe<H: PortHandler<P>>(&self, handler: H) {
        match self.ports.table.inbound(self.name) {
            Some(channel) => channel.subscribe(Box::new(Reported {
                channel: self.name.to_owned(),
                handler,
                reporter: self.ports.reporter.clone(),
            })),
            None => self
                .ports
                .reporter
                .report(&Diagnostic::missing(self.name, ChannelOp::Subscribe)),
        }
    }

    /// Forward `payload` on this port.
    ///
    /// When the channel is not live, one diagnostic is emitted and the
    /// payload is discarded.
    pub fn send(&self, payload: P) {
        match self.ports.table.outbound(self.name) {
            Some(channel) => channel.send(payload),
            None => self
                .ports
                .reporter
                .report(&Diagnostic::missing(self.name, ChannelOp::Send)),
        }
    }
}

/// Wraps a subscribed handler so its failures surface as diagnostics
/// instead of unwinding into the application's event loop.
struct Reported<H> {
    channel: String,
    handler: H,
    reporter: Arc<dyn Reporter>,
}

impl<P: Message, H: PortHandler<P>> PortHandler<P> for Reported<H> {
    async fn handle(&self, payload: P) -> Result<(), BoxError> {
        if let Err(err) = self.handler.handle(payload).await {
            self.reporter.report(&Diagnostic::failed(
                &self.channel,
                ChannelOp::Subscribe,
                err.to_string(),
            ));
        }
        Ok(())
    }
}
