//! Tokio broadcast-channel fan-out.

use crate::event::{Channel, MintEvent};
use crate::sink::{EventError, NotificationSink};
use serde::Serialize;
use tokio::sync::broadcast;

/// A published event together with the channel it was addressed to.
#[derive(Clone, Debug, Serialize)]
pub struct Envelope {
    pub channel: Channel,
    pub event: MintEvent,
}

/// Fan-out sink over a tokio broadcast channel.
///
/// Subscribers get every envelope and filter by channel themselves.
/// Publishing with zero subscribers succeeds: nobody listening is not a
/// delivery failure.
pub struct BroadcastSink {
    tx: broadcast::Sender<Envelope>,
}

impl BroadcastSink {
    /// `capacity` is the per-subscriber buffer; slow subscribers that fall
    /// more than `capacity` envelopes behind observe a lag error on their
    /// receiver, not here.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl NotificationSink for BroadcastSink {
    fn publish(&self, channel: &Channel, event: &MintEvent) -> Result<(), EventError> {
        let envelope = Envelope {
            channel: channel.clone(),
            event: event.clone(),
        };
        // send() errors only when there are no receivers; that is success
        // for a best-effort sink.
        let _ = self.tx.send(envelope);
        Ok(())
    }
}
