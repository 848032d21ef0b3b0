//! Payloads carried on bootstrap-wired ports.

use gangway_core::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The payload flowing on bootstrap-wired channels.
///
/// Ports carry no payload (a bare request), a string, or structured JSON;
/// well-known structured payloads round-trip through [`PortEvent::Json`].
#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    /// No payload.
    Empty,
    /// A bare string payload.
    Text(String),
    /// A structured JSON payload.
    Json(Value),
}

impl Message for PortEvent {}

impl PortEvent {
    /// The string payload, when this event carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            PortEvent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The JSON payload, when this event carries one.
    pub fn json(&self) -> Option<&Value> {
        match self {
            PortEvent::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for PortEvent {
    fn from(text: String) -> Self {
        PortEvent::Text(text)
    }
}

impl From<&str> for PortEvent {
    fn from(text: &str) -> Self {
        PortEvent::Text(text.to_owned())
    }
}

impl From<Value> for PortEvent {
    fn from(value: Value) -> Self {
        PortEvent::Json(value)
    }
}

/// A JSON decode failure reported by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeErrorReport {
    /// Identifier of the page or decoder that failed.
    pub source: String,
    /// The decode error description.
    pub error: String,
}

/// A navigation failure reported by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationErrorReport {
    /// The URL that failed to load.
    pub url: String,
    /// The navigation error description.
    pub error: String,
}

impl DecodeErrorReport {
    /// Parse a report out of a port event, if the payload has the right
    /// shape.
    pub fn from_event(event: &PortEvent) -> Option<Self> {
        serde_json::from_value(event.json()?.clone()).ok()
    }

    /// Encode this report as a port event.
    pub fn to_event(&self) -> PortEvent {
        PortEvent::Json(serde_json::json!({
            "source": self.source,
            "error": self.error,
        }))
    }
}

impl NavigationErrorReport {
    /// Parse a report out of a port event, if the payload has the right
    /// shape.
    pub fn from_event(event: &PortEvent) -> Option<Self> {
        serde_json::from_value(event.json()?.clone()).ok()
    }

    /// Encode this report as a port event.
    pub fn to_event(&self) -> PortEvent {
        PortEvent::Json(serde_json::json!({
            "url": self.url,
            "error": self.error,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeErrorReport, NavigationErrorReport, PortEvent};
    use serde_json::json;

    #[test]
    fn decode_report_round_trips() {
        let report = DecodeErrorReport {
            source: "login".to_owned(),
            error: "missing field `user`".to_owned(),
        };
        assert_eq!(DecodeErrorReport::from_event(&report.to_event()), Some(report));
    }

    #[test]
    fn navigation_report_round_trips() {
        let report = NavigationErrorReport {
            url: "https://example.test/deck".to_owned(),
            error: "timeout".to_owned(),
        };
        assert_eq!(NavigationErrorReport::from_event(&report.to_event()), Some(report));
    }

    #[test]
    fn wrong_shapes_do_not_parse() {
        assert_eq!(DecodeErrorReport::from_event(&PortEvent::Empty), None);
        assert_eq!(DecodeErrorReport::from_event(&PortEvent::Text("x".into())), None);
        assert_eq!(
            DecodeErrorReport::from_event(&PortEvent::Json(json!({"unrelated": 1}))),
            None
        );
    }
}
