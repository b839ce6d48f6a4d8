//! Explicit observer registry for list-change notifications.
//!
//! The registry replaces implicit event-target inheritance: whoever wants
//! change notifications subscribes a callback and holds the returned id
//! for later removal. Notification is synchronous and runs observers in
//! subscription order. The registry locks internally so it can be shared
//! behind `Arc` by sources, the model, and embedding code.

use parking_lot::Mutex;

use crate::permutation::Permutation;

/// Callback invoked with each emitted change.
pub type ChangeObserver = Box<dyn FnMut(&Permutation) + Send>;

/// Handle identifying one subscription within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct RegistryInner {
    observers: Vec<(SubscriptionId, ChangeObserver)>,
    next_id: u64,
}

/// Registry of list-change observers with explicit subscribe and
/// unsubscribe.
///
/// Observers must not subscribe, unsubscribe, or notify the same
/// registry from within a callback; the internal lock is not reentrant.
#[derive(Default)]
pub struct ObserverRegistry {
    inner: Mutex<RegistryInner>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` and return the id that removes it again.
    pub fn subscribe(&self, observer: impl FnMut(&Permutation) + Send + 'static) -> SubscriptionId {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove the subscription behind `id`. Returns whether it was still
    /// registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.observers.len();
        inner.observers.retain(|(candidate, _)| *candidate != id);
        inner.observers.len() != before
    }

    /// Deliver `change` to every observer, in subscription order.
    pub fn notify(&self, change: &Permutation) {
        let mut inner = self.inner.lock();
        for (_, observer) in inner.observers.iter_mut() {
            observer(change);
        }
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observer_count())
            .finish()
    }
}
