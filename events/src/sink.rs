//! The notification-sink seam.

use crate::event::{Channel, MintEvent};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("publish failed: {0}")]
    Publish(String),
}

/// Best-effort event publication.
///
/// Engines call this after their state mutations have committed; an error
/// here is logged by the caller and never surfaced to the user. A real
/// push-notification fan-out would implement this trait; the demo uses
/// [`crate::BroadcastSink`].
pub trait NotificationSink: Send + Sync {
    fn publish(&self, channel: &Channel, event: &MintEvent) -> Result<(), EventError>;
}

/// Discards every event. The default when eventing is disabled.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn publish(&self, _channel: &Channel, _event: &MintEvent) -> Result<(), EventError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_types::{TxId, WalletId};

    #[test]
    fn null_sink_swallows_everything() {
        let sink = NullSink;
        let event = MintEvent::VerificationOpportunity {
            id: TxId::ZERO,
            sender: WalletId::new("mint_a"),
        };
        assert!(sink.publish(&Channel::Broadcast, &event).is_ok());
    }
}
