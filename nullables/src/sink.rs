//! Notification-sink test doubles.

use mint_events::{Channel, EventError, MintEvent, NotificationSink};
use std::sync::Mutex;

/// Captures every published `(channel, event)` pair for assertions.
pub struct RecordingSink {
    published: Mutex<Vec<(Channel, MintEvent)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<(Channel, MintEvent)> {
        self.published.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    /// Events published to a given channel, in publication order.
    pub fn events_for(&self, channel: &Channel) -> Vec<MintEvent> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == channel)
            .map(|(_, e)| e.clone())
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for RecordingSink {
    fn publish(&self, channel: &Channel, event: &MintEvent) -> Result<(), EventError> {
        self.published
            .lock()
            .unwrap()
            .push((channel.clone(), event.clone()));
        Ok(())
    }
}

/// Fails every publish. For tests asserting that sink failures never break
/// engine operations.
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn publish(&self, _channel: &Channel, _event: &MintEvent) -> Result<(), EventError> {
        Err(EventError::Publish("sink configured to fail".to_string()))
    }
}
