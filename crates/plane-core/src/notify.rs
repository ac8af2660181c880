// File: crates/plane-core/src/notify.rs
// Summary: Named-event publish/subscribe with drainable single-threaded inboxes.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

/// Name of the event that requests a full redraw.
pub const REDRAW_EVENT: &str = "redraw";

/// Named-event notification channel.
///
/// Publishers may live on any thread; each subscriber owns a drainable inbox
/// that the render loop empties before a frame, so rendering is never
/// invoked reentrantly from a publisher's context. Zero or many publishers
/// per event name are fine.
#[derive(Clone, Default)]
pub struct NotificationHub {
    registry: Arc<Mutex<HashMap<String, Vec<Sender<()>>>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inbox for `event`.
    pub fn subscribe(&self, event: &str) -> NotificationReceiver {
        let (tx, rx) = channel();
        let mut registry = self.registry.lock().expect("notification registry poisoned");
        registry.entry(event.to_string()).or_default().push(tx);
        NotificationReceiver { rx }
    }

    /// A cloneable publisher handle for this hub.
    pub fn sender(&self) -> NotificationSender {
        NotificationSender {
            registry: Arc::clone(&self.registry),
        }
    }
}

/// Publisher side of a [`NotificationHub`].
#[derive(Clone)]
pub struct NotificationSender {
    registry: Arc<Mutex<HashMap<String, Vec<Sender<()>>>>>,
}

impl NotificationSender {
    /// Notify every subscriber of `event`. Subscribers whose inbox has been
    /// dropped are pruned as a side effect.
    pub fn publish(&self, event: &str) {
        let mut registry = self.registry.lock().expect("notification registry poisoned");
        if let Some(subscribers) = registry.get_mut(event) {
            subscribers.retain(|tx| tx.send(()).is_ok());
        }
    }
}

/// Subscriber inbox; drained at most once per frame by the render loop.
pub struct NotificationReceiver {
    rx: Receiver<()>,
}

impl NotificationReceiver {
    /// Remove and count all pending notifications without blocking.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_matching_subscribers_only() {
        let hub = NotificationHub::new();
        let redraw = hub.subscribe(REDRAW_EVENT);
        let other = hub.subscribe("other");
        let sender = hub.sender();

        sender.publish(REDRAW_EVENT);
        sender.publish(REDRAW_EVENT);
        assert_eq!(redraw.drain(), 2);
        assert_eq!(other.drain(), 0);
        // Drained inbox stays empty until the next publish.
        assert_eq!(redraw.drain(), 0);
    }

    #[test]
    fn multiple_publishers_share_one_inbox() {
        let hub = NotificationHub::new();
        let inbox = hub.subscribe(REDRAW_EVENT);
        let a = hub.sender();
        let b = a.clone();
        a.publish(REDRAW_EVENT);
        b.publish(REDRAW_EVENT);
        assert_eq!(inbox.drain(), 2);
    }

    #[test]
    fn publish_from_another_thread() {
        let hub = NotificationHub::new();
        let inbox = hub.subscribe(REDRAW_EVENT);
        let sender = hub.sender();
        std::thread::spawn(move || sender.publish(REDRAW_EVENT))
            .join()
            .unwrap();
        assert_eq!(inbox.drain(), 1);
    }

    #[test]
    fn publish_with_no_subscribers_is_harmless() {
        let hub = NotificationHub::new();
        hub.sender().publish("nobody-listening");
    }
}
