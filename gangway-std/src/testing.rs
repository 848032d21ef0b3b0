//! Testing utilities for Gangway.
//!
//! This module provides doubles that make testing the dispatch safety
//! layer and the bootstrap wiring easier.
//!
//! # Features
//!
//! - [`RecordingReporter`]: a reporter that records every diagnostic
//! - [`RecordingSink`]: a telemetry sink that records captures and can be
//!   made to fail
//! - [`RecordingHandler`]: a port handler that records received payloads
//! - [`CountingHandler`]: a port handler that counts invocations
//! - [`FailingHandler`]: a port handler that always errors

use crate::report::{SinkError, TelemetrySink};
use gangway_core::{BoxError, Diagnostic, Message, PortHandler, Reporter};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Reporter
// ============================================================================

/// A reporter that records every diagnostic it receives.
///
/// # Example
///
/// ```rust,ignore
/// let reporter = RecordingReporter::default();
/// let ports = SafePorts::wrap(table, Arc::new(reporter.clone()));
///
/// ports.port("missing").send(payload);
///
/// assert_eq!(reporter.count(), 1);
/// ```
#[derive(Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingReporter {
    /// Get a clone of the recorded diagnostics.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded diagnostics.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded diagnostics.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Clone for RecordingReporter {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        self.events.lock().unwrap().push(diagnostic.clone());
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// A telemetry sink that records captures and can be programmed to fail.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::default();
/// sink.set_error("collector is down");
///
/// // EnvReporter must swallow the failure.
/// reporter.report(&diagnostic);
/// ```
#[derive(Default)]
pub struct RecordingSink {
    captured: Arc<Mutex<Vec<Diagnostic>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl RecordingSink {
    /// Get a clone of the captured diagnostics.
    pub fn captured(&self) -> Vec<Diagnostic> {
        self.captured.lock().unwrap().clone()
    }

    /// Get the number of captured diagnostics.
    pub fn count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }

    /// Make every subsequent capture fail.
    pub fn set_error(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Clear the failure state.
    pub fn clear_error(&self) {
        *self.fail_with.lock().unwrap() = None;
    }
}

impl Clone for RecordingSink {
    fn clone(&self) -> Self {
        Self {
            captured: self.captured.clone(),
            fail_with: self.fail_with.clone(),
        }
    }
}

impl TelemetrySink for RecordingSink {
    fn capture(&self, diagnostic: &Diagnostic) -> Result<(), BoxError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(SinkError(message).into());
        }
        self.captured.lock().unwrap().push(diagnostic.clone());
        Ok(())
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A port handler that records every payload it receives.
pub struct RecordingHandler<P> {
    received: Arc<Mutex<Vec<P>>>,
}

impl<P> RecordingHandler<P> {
    /// Get a clone of the received payloads.
    pub fn received(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.received.lock().unwrap().clone()
    }

    /// Get the number of received payloads.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<P> Default for RecordingHandler<P> {
    fn default() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<P> Clone for RecordingHandler<P> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<P: Message> PortHandler<P> for RecordingHandler<P> {
    async fn handle(&self, payload: P) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(payload);
        Ok(())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A port handler that counts invocations.
#[derive(Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<P: Message> PortHandler<P> for CountingHandler {
    async fn handle(&self, _payload: P) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A port handler that fails every invocation with a fixed message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler that fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<P: Message> PortHandler<P> for FailingHandler {
    async fn handle(&self, _payload: P) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
