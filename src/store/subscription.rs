//! Listener registry and the unsubscribe capability.

use std::fmt;
use std::sync::{Arc, Weak};

/// A zero-argument callback notified after every dispatch.
pub(crate) type Listener = Arc<dyn Fn() + Send + Sync>;

/// Identifies one registration in a store's listener registry.
///
/// Ids are allocated from a per-store counter and never reused, so an id
/// always refers to exactly one `subscribe` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Ordered collection of active listeners.
///
/// Insertion order is notification order.
#[derive(Default)]
pub(crate) struct Registry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a listener, returning its fresh id.
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove the registration with this id. Returns `false` if it was
    /// already gone.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current listeners in notification order.
    ///
    /// Later inserts and removals do not affect the returned list.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// Removal side of a store, erased over its state and action types.
pub(crate) trait Deregister: Send + Sync {
    fn deregister(&self, id: ListenerId) -> bool;

    fn is_registered(&self, id: ListenerId) -> bool;
}

/// Capability returned by `Store::subscribe`.
///
/// Holds a weak reference to the store, so an outstanding subscription
/// never keeps a store alive. Dropping a `Subscription` does not
/// unsubscribe; the listener stays registered until [`unsubscribe`] is
/// called.
///
/// [`unsubscribe`]: Subscription::unsubscribe
#[derive(Clone)]
pub struct Subscription {
    id: ListenerId,
    store: Weak<dyn Deregister>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, store: Weak<dyn Deregister>) -> Self {
        Self { id, store }
    }

    /// Id of the registration this capability controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove this registration from the store.
    ///
    /// Idempotent: calling it again, through a clone, or after the store
    /// was dropped does nothing. Other registrations of the same listener
    /// are not affected.
    pub fn unsubscribe(&self) {
        if let Some(store) = self.store.upgrade() {
            store.deregister(self.id);
        }
    }

    /// Check whether the registration is still present.
    pub fn is_active(&self) -> bool {
        self.store
            .upgrade()
            .is_some_and(|store| store.is_registered(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
