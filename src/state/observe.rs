/// Observer registry shared by the state machines
///
/// A deliberately small subscription container: callers register a callback
/// and get back an id they can later use to unsubscribe. Notifications are
/// delivered synchronously, in subscription order, strictly after the state
/// mutation they describe, so observers always see a consistent snapshot.

/// Handle returned by `subscribe`, used to remove the callback again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Holds the subscriber list for one event type.
pub struct Notifier<E> {
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&E) + Send>)>,
    next_id: u64,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Notifier {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback; it stays active until `unsubscribe` is called
    /// with the returned id.
    pub fn subscribe(&mut self, callback: impl Fn(&E) + Send + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback.
    /// Returns false if the id was already removed (or never existed).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber, in subscription order.
    pub fn notify(&self, event: &E) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}
