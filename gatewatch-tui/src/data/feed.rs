//! Bounded feed of recent live messages.

use std::collections::VecDeque;

use super::live::LiveMessage;

/// Default number of messages the feed retains.
pub const DEFAULT_FEED_CAPACITY: usize = 10;

/// Ring of the most recent live messages, oldest first.
///
/// Messages arriving beyond the capacity drop the oldest entry. There
/// is no backpressure: bursts simply coalesce into the last N seen.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    entries: VecDeque<LiveMessage>,
    capacity: usize,
}

impl Feed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: LiveMessage) {
        self.entries.push_back(message);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LiveMessage> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(n: usize) -> LiveMessage {
        LiveMessage::from_payload(json!({"type": "entry_updated", "data": n}), n as i64)
    }

    #[test]
    fn capacity_keeps_the_last_ten_in_order() {
        let mut feed = Feed::new(DEFAULT_FEED_CAPACITY);
        for n in 0..12 {
            feed.push(message(n));
        }

        assert_eq!(feed.len(), 10);
        let received: Vec<i64> = feed.iter().map(|m| m.received_at_ms).collect();
        // Oldest-first: entries 2 through 11 survive.
        assert_eq!(received, (2..12).collect::<Vec<i64>>());
    }

    #[test]
    fn under_capacity_keeps_everything() {
        let mut feed = Feed::new(DEFAULT_FEED_CAPACITY);
        for n in 0..3 {
            feed.push(message(n));
        }
        assert_eq!(feed.len(), 3);
        assert!(!feed.is_empty());
    }
}
