//! # Handler Layer (PortHandler)
//!
//! The unit of inbound event processing in Gangway.
//!
//! A handler is registered on an inbound port and invoked by the rendering
//! application's own scheduler whenever an inbound event arrives. Gangway
//! never schedules invocation itself; it only registers handlers and gets
//! out of the way.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`PortHandler`] uses native `async fn` for zero-cost static dispatch.
//! For dynamic dispatch (handlers of different concrete types stored in a
//! subscriber list), use [`DynPortHandler`].

use crate::{error::BoxError, message::Message};
use std::{future::Future, pin::Pin};

/// A handler for inbound port events.
///
/// Handlers receive a fully owned payload and perform async work. A
/// returned error does not unwind into the application's event loop; the
/// dispatch safety layer converts it into a diagnostic.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle payloads of type `{P}`",
    label = "missing `PortHandler<{P}>` implementation",
    note = "Handlers must implement the `handle` method for the payload type `{P}`."
)]
pub trait PortHandler<P: Message>: Send + Sync + 'static {
    /// Called when an inbound event arrives on the subscribed port.
    fn handle(&self, payload: P) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`PortHandler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a
/// subscriber list).
pub trait DynPortHandler<P: Message>: Send + Sync + 'static {
    /// Called when an inbound event arrives (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        payload: P,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any type implementing PortHandler implements
// DynPortHandler automatically.
impl<P: Message, T: PortHandler<P>> DynPortHandler<P> for T {
    fn handle_dyn<'a>(
        &'a self,
        payload: P,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.handle(payload))
    }
}

// Blanket impl for closures
impl<P, F, Fut> PortHandler<P> for F
where
    P: Message,
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    fn handle(&self, payload: P) -> impl Future<Output = Result<(), BoxError>> + Send {
        (self)(payload)
    }
}
