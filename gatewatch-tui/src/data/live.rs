//! Live push-channel data: messages, channel events, and the state the
//! dashboard keeps about the connection.
//!
//! The transport itself lives in the `live` module (behind the `live`
//! feature); these types are plain data so the Live view renders the
//! same with or without a listener attached.

use serde_json::Value;

use super::feed::{Feed, DEFAULT_FEED_CAPACITY};

/// One message from the push channel.
///
/// Payloads are opaque JSON. Well-formed messages are objects with
/// optional `type` / `data` / `timestamp` fields; anything else is
/// kept verbatim as the data value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveMessage {
    /// The sender's event type, e.g. "entry_created".
    pub kind: Option<String>,
    pub data: Value,
    /// The sender's timestamp, verbatim.
    pub timestamp: Option<String>,
    /// Local receive time, epoch milliseconds.
    pub received_at_ms: i64,
}

impl LiveMessage {
    pub fn from_payload(value: Value, received_at_ms: i64) -> Self {
        let (kind, data, timestamp) = match &value {
            Value::Object(map) => (
                map.get("type").and_then(Value::as_str).map(String::from),
                map.get("data").cloned().unwrap_or_else(|| value.clone()),
                map.get("timestamp").and_then(Value::as_str).map(String::from),
            ),
            _ => (None, value.clone(), None),
        };

        Self {
            kind,
            data,
            timestamp,
            received_at_ms,
        }
    }

    /// "entry_created" -> "Entry Created"; unknown kinds keep a
    /// placeholder.
    pub fn kind_title(&self) -> String {
        match &self.kind {
            None => "Message".to_string(),
            Some(kind) => kind
                .split('_')
                .filter(|word| !word.is_empty())
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Connection lifecycle and payload events emitted by the listener.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    Connected,
    Disconnected,
    Data(LiveMessage),
}

/// What the dashboard knows about the push channel.
#[derive(Debug, Clone)]
pub struct LiveState {
    /// The channel endpoint, if a listener was attached.
    pub endpoint: Option<String>,
    pub connected: bool,
    /// The most recently received message.
    pub latest: Option<LiveMessage>,
    /// Recent messages, oldest first.
    pub feed: Feed,
}

impl Default for LiveState {
    fn default() -> Self {
        Self {
            endpoint: None,
            connected: false,
            latest: None,
            feed: Feed::new(DEFAULT_FEED_CAPACITY),
        }
    }
}

impl LiveState {
    pub fn apply(&mut self, event: LiveEvent) {
        match event {
            LiveEvent::Connected => self.connected = true,
            LiveEvent::Disconnected => self.connected = false,
            LiveEvent::Data(message) => {
                self.latest = Some(message.clone());
                self.feed.push(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_payload_splits_into_fields() {
        let message = LiveMessage::from_payload(
            json!({"type": "entry_created", "data": {"id": 7}, "timestamp": "2026-08-07T10:00:00Z"}),
            123,
        );
        assert_eq!(message.kind.as_deref(), Some("entry_created"));
        assert_eq!(message.data, json!({"id": 7}));
        assert_eq!(message.timestamp.as_deref(), Some("2026-08-07T10:00:00Z"));
        assert_eq!(message.kind_title(), "Entry Created");
    }

    #[test]
    fn bare_payload_is_kept_as_data() {
        let message = LiveMessage::from_payload(json!([1, 2, 3]), 0);
        assert_eq!(message.kind, None);
        assert_eq!(message.data, json!([1, 2, 3]));
        assert_eq!(message.kind_title(), "Message");
    }

    #[test]
    fn object_without_data_field_is_kept_whole() {
        let message = LiveMessage::from_payload(json!({"type": "ping", "seq": 4}), 0);
        assert_eq!(message.data, json!({"type": "ping", "seq": 4}));
    }

    #[test]
    fn connection_events_toggle_the_flag() {
        let mut state = LiveState::default();
        assert!(!state.connected);

        state.apply(LiveEvent::Connected);
        assert!(state.connected);

        state.apply(LiveEvent::Data(LiveMessage::from_payload(json!({"type": "x"}), 1)));
        assert!(state.latest.is_some());
        assert_eq!(state.feed.len(), 1);

        state.apply(LiveEvent::Disconnected);
        assert!(!state.connected);
        // The feed survives a disconnect.
        assert_eq!(state.feed.len(), 1);
    }
}
