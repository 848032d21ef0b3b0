//! In-memory port table.
//!
//! The standard [`PortTable`] implementation: the stand-in for a rendering
//! application's channel registry in tests and in embeddings that drive
//! the application loop from Rust. Channel names are fixed at build time
//! (channels never become available after construction); subscriptions
//! and outbound payloads flow at runtime.
//!
//! [`PortTable`]: gangway_core::PortTable

use futures::future::join_all;
use gangway_core::{BoxError, DynPortHandler, InboundPort, Message, OutboundPort, PortTable};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// How an inbound channel delivers one event to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Subscribers run one by one, stopping at the first error.
    #[default]
    Sequential,
    /// Subscribers run concurrently via `join_all`.
    Concurrent,
}

/// A live inbound channel backed by a subscriber list.
pub struct MemoryInbound<P: Message> {
    subscribers: Mutex<Vec<Arc<dyn DynPortHandler<P>>>>,
    delivery: DeliveryMode,
}

impl<P: Message> MemoryInbound<P> {
    fn new(delivery: DeliveryMode) -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            delivery,
        }
    }

    /// The number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    /// Deliver one event to every subscriber.
    ///
    /// This is the application scheduler in miniature: Gangway itself
    /// never calls it, only the application side does.
    pub async fn emit(&self, payload: &P) -> Result<(), BoxError>
    where
        P: Clone,
    {
        // Snapshot under the lock so handlers can subscribe re-entrantly.
        let subscribers: Vec<_> = self.subscribers.lock().unwrap().clone();
        match self.delivery {
            DeliveryMode::Sequential => {
                for subscriber in &subscribers {
                    subscriber.handle_dyn(payload.clone()).await?;
                }
            }
            DeliveryMode::Concurrent => {
                let results =
                    join_all(subscribers.iter().map(|s| s.handle_dyn(payload.clone()))).await;
                for result in results {
                    result?;
                }
            }
        }
        Ok(())
    }
}

impl<P: Message> InboundPort<P> for MemoryInbound<P> {
    fn subscribe(&self, handler: Box<dyn DynPortHandler<P>>) {
        self.subscribers.lock().unwrap().push(Arc::from(handler));
    }
}

/// A live outbound channel backed by a payload queue.
///
/// The application side consumes the queue with [`drain`].
///
/// [`drain`]: MemoryOutbound::drain
pub struct MemoryOutbound<P: Message> {
    queue: Mutex<Vec<P>>,
}

impl<P: Message> MemoryOutbound<P> {
    fn new() -> Self {
        Self {
            queue: Mutex::new(Vec::new()),
        }
    }

    /// Take every queued payload, oldest first.
    pub fn drain(&self) -> Vec<P> {
        std::mem::take(&mut *self.queue.lock().unwrap())
    }

    /// The number of queued payloads.
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().unwrap().is_empty()
    }
}

impl<P: Message> OutboundPort<P> for MemoryOutbound<P> {
    fn send(&self, payload: P) {
        self.queue.lock().unwrap().push(payload);
    }
}

/// An in-memory [`PortTable`] with a fixed channel set.
///
/// [`PortTable`]: gangway_core::PortTable
pub struct MemoryPorts<P: Message> {
    inbound: HashMap<String, MemoryInbound<P>>,
    outbound: HashMap<String, MemoryOutbound<P>>,
}

impl<P: Message> MemoryPorts<P> {
    /// Start building a table.
    pub fn builder() -> MemoryPortsBuilder<P> {
        MemoryPortsBuilder::new()
    }

    /// The inbound channel named `name`, for the application side to emit
    /// events through.
    pub fn inbound_channel(&self, name: &str) -> Option<&MemoryInbound<P>> {
        self.inbound.get(name)
    }

    /// The outbound channel named `name`, for the application side to
    /// drain.
    pub fn outbound_channel(&self, name: &str) -> Option<&MemoryOutbound<P>> {
        self.outbound.get(name)
    }
}

impl<P: Message> PortTable<P> for MemoryPorts<P> {
    fn inbound(&self, name: &str) -> Option<&dyn InboundPort<P>> {
        self.inbound.get(name).map(|channel| channel as &dyn InboundPort<P>)
    }

    fn outbound(&self, name: &str) -> Option<&dyn OutboundPort<P>> {
        self.outbound.get(name).map(|channel| channel as &dyn OutboundPort<P>)
    }
}

/// Builder for constructing a [`MemoryPorts`] table.
pub struct MemoryPortsBuilder<P: Message> {
    inbound: HashMap<String, MemoryInbound<P>>,
    outbound: HashMap<String, MemoryOutbound<P>>,
    delivery: DeliveryMode,
}

impl<P: Message> Default for MemoryPortsBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Message> MemoryPortsBuilder<P> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            inbound: HashMap::new(),
            outbound: HashMap::new(),
            delivery: DeliveryMode::default(),
        }
    }

    /// Set the delivery mode for inbound channels registered after this
    /// call.
    pub fn delivery(mut self, mode: DeliveryMode) -> Self {
        self.delivery = mode;
        self
    }

    /// Register an inbound channel.
    pub fn inbound(mut self, name: impl Into<String>) -> Self {
        self.inbound
            .insert(name.into(), MemoryInbound::new(self.delivery));
        self
    }

    /// Register an outbound channel.
    pub fn outbound(mut self, name: impl Into<String>) -> Self {
        self.outbound.insert(name.into(), MemoryOutbound::new());
        self
    }

    /// Build the table. The channel set is fixed from here on.
    pub fn build(self) -> MemoryPorts<P> {
        MemoryPorts {
            inbound: self.inbound,
            outbound: self.outbound,
        }
    }
}
