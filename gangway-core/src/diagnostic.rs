//! # Reporting Layer (Diagnostic / Reporter)
//!
//! Every failed channel resolution and every handler failure becomes a
//! [`Diagnostic`] routed through a [`Reporter`]. Where the diagnostic ends
//! up (a developer-visible log, a telemetry collector) is decided by the
//! reporter implementation, not the call site.
//!
//! Reporters are infallible by signature: a reporter that cannot deliver
//! swallows the failure rather than cascading it into the caller.

use std::fmt;

/// The operation requested on a channel when a diagnostic was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOp {
    /// An inbound handler registration (or an event delivered through one).
    Subscribe,
    /// An outbound payload emission.
    Send,
}

impl fmt::Display for ChannelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelOp::Subscribe => f.write_str("subscribe"),
            ChannelOp::Send => f.write_str("send"),
        }
    }
}

/// A failure event tied to one channel access.
///
/// Ephemeral: emitted once per failed resolution or failed handler run,
/// never stored by this layer, never deduplicated across accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The channel name that was being accessed.
    pub channel: String,
    /// The operation that was requested.
    pub op: ChannelOp,
    /// An error payload, when one is available.
    pub detail: Option<String>,
}

impl Diagnostic {
    /// A diagnostic for a channel that was not present on the table.
    pub fn missing(channel: impl Into<String>, op: ChannelOp) -> Self {
        Self {
            channel: channel.into(),
            op,
            detail: None,
        }
    }

    /// A diagnostic carrying an error payload from a failed handler or a
    /// report delivered by the application.
    pub fn failed(channel: impl Into<String>, op: ChannelOp, detail: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            op,
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "port `{}` ({}): {}", self.channel, self.op, detail),
            None => write!(f, "port `{}` ({}): channel not registered", self.channel, self.op),
        }
    }
}

/// Routes diagnostics to an environment-appropriate sink.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Reporter`",
    label = "missing `Reporter` implementation",
    note = "Reporters must implement the `report` method."
)]
pub trait Reporter: Send + Sync {
    /// Record one diagnostic. Must not panic or block the caller.
    fn report(&self, diagnostic: &Diagnostic);
}

/// A reporter that discards every diagnostic.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _diagnostic: &Diagnostic) {}
}
