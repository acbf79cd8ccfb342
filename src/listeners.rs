//! Store change listeners

use std::fmt;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle returned by `subscribe`, used to unsubscribe.
    pub struct ListenerKey;
}

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Registry of callbacks invoked synchronously after a store mutates.
pub struct Listeners<T> {
    listeners: SlotMap<ListenerKey, Listener<T>>,
}

impl<T> Listeners<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl Fn(&T) + Send + Sync + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if the key was already removed.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Call every listener with the current state.
    pub fn notify(&self, state: &T) {
        for listener in self.listeners.values() {
            listener(state);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, AtomicUsize, Ordering},
    };

    use super::*;

    #[test]
    fn notifies_subscribed_listeners() {
        let mut listeners = Listeners::<u32>::new();
        let seen = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&seen);
        listeners.subscribe(move |value| {
            counter.fetch_add(*value, Ordering::SeqCst);
        });

        listeners.notify(&3);
        listeners.notify(&4);

        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut listeners = Listeners::<u32>::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let key = listeners.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(listeners.unsubscribe(key));
        assert!(!listeners.unsubscribe(key));

        listeners.notify(&1);

        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert!(listeners.is_empty());
    }
}
