//! Environment-routed diagnostic reporting.
//!
//! One reporter, two destinations: in development a diagnostic is written
//! as a human-readable log line; in production the same event is
//! forwarded to a durable telemetry sink. The environment is injected at
//! construction, never checked ambiently at call sites, so the two modes
//! share structure and call sites never branch.

use gangway_core::{BoxError, Diagnostic, Reporter};
use thiserror::Error;

/// The runtime environment a reporter routes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Verbose, developer-visible reporting.
    #[default]
    Development,
    /// Silent reporting into a telemetry sink.
    Production,
}

/// Recognized reporter configuration.
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
    /// Which environment the reporter routes for.
    pub environment: Environment,
}

/// A durable telemetry collector (external collaborator).
///
/// The real collector is an error-reporting service wired in by the host
/// application; Gangway only defines the integration point.
pub trait TelemetrySink: Send + Sync {
    /// Record one diagnostic.
    fn capture(&self, diagnostic: &Diagnostic) -> Result<(), BoxError>;
}

/// A sink that records nothing, for hosts with no collector wired.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn capture(&self, _diagnostic: &Diagnostic) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Error returned by a telemetry sink that could not record an event.
#[derive(Error, Debug)]
#[error("telemetry sink unavailable: {0}")]
pub struct SinkError(pub String);

/// Routes diagnostics by environment: development gets a log line,
/// production forwards to the telemetry sink.
pub struct EnvReporter<S> {
    environment: Environment,
    sink: S,
}

impl<S> EnvReporter<S> {
    /// Create a reporter from its configuration and a telemetry sink.
    pub fn new(config: ReporterConfig, sink: S) -> Self {
        Self {
            environment: config.environment,
            sink,
        }
    }

    /// The environment this reporter routes for.
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

impl<S: TelemetrySink> Reporter for EnvReporter<S> {
    fn report(&self, diagnostic: &Diagnostic) {
        match self.environment {
            Environment::Development => {
                tracing::warn!(
                    channel = %diagnostic.channel,
                    op = %diagnostic.op,
                    detail = diagnostic.detail.as_deref(),
                    "port diagnostic"
                );
            }
            Environment::Production => {
                // A sink that cannot record must not cascade into the caller.
                let _ = self.sink.capture(diagnostic);
            }
        }
    }
}
