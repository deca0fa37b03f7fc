use tokio::sync::broadcast;
use tracing::debug;

use scripto_types::Notification;

/// Sink for user-facing feedback. The pipeline reports through this port
/// and never talks to a UI directly.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Fans notifications out to every subscriber. Lagging subscribers lose the
/// oldest entries.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: broadcast::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for ChannelNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        debug!(level = ?notification.level, "{}", notification.title);
        // No subscribers is fine
        let _ = self.tx.send(notification);
    }
}
