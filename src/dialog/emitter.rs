//! Outbound notification channels for the dialog.
//!
//! The widget never reaches into its host; everything it has to say goes
//! through a [`Notifier`] the host subscribes to. Delivery is a synchronous
//! enqueue onto an unbounded channel, so a value is observable by the
//! subscriber as soon as `notify` returns.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Fan-out notification channel.
///
/// Every subscriber receives every value sent after it subscribed. There is
/// no batching, debouncing, or retry; subscribers whose receiver has been
/// dropped are pruned on the next `notify`.
pub struct Notifier<T> {
    subscribers: Vec<UnboundedSender<T>>,
}

impl<T: Clone> Notifier<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `value` to every live subscriber.
    pub fn notify(&mut self, value: T) {
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
