//! The store: state register, dispatch pipeline and notification.

use crate::core::{validate, Record};
use crate::store::error::StoreError;
use crate::store::subscription::{Deregister, ListenerId, Registry, Subscription};
use parking_lot::ReentrantMutex;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::{Arc, Weak};

/// Pure function computing the next state from the current one and an action.
pub type Reducer<S, A> = Box<dyn Fn(&S, &A) -> S + Send + Sync>;

/// Mutable part of a store. Only reachable through the store's lock.
struct Core<S> {
    state: RefCell<S>,
    listeners: RefCell<Registry>,
    reducing: Cell<bool>,
}

pub(crate) struct Inner<S, A> {
    name: String,
    reducer: Reducer<S, A>,
    core: ReentrantMutex<Core<S>>,
}

/// Single-state container updated only through its reducer.
///
/// A `Store` is a handle: cloning it is cheap and every clone talks to the
/// same state and listener registry. All operations on one store are
/// serialized behind a re-entrant lock, so a listener or reducer running on
/// the dispatching thread can call back into the store without
/// deadlocking, while other threads wait their turn.
///
/// # Example
///
/// ```rust
/// use reduxo::{create_store, Record};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     value: i64,
/// }
/// impl Record for Counter {}
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Add(i64),
/// }
/// impl Record for CounterAction {}
///
/// let store = create_store(
///     |state: &Counter, action: &CounterAction| match action {
///         CounterAction::Add(n) => Counter { value: state.value + n },
///     },
///     Counter { value: 0 },
/// )
/// .unwrap();
///
/// store.dispatch(CounterAction::Add(2)).unwrap();
/// store.dispatch(CounterAction::Add(3)).unwrap();
/// assert_eq!(store.get_state(), Counter { value: 5 });
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S: Record, A: Record> Store<S, A> {
    /// Allocate a store from already-validated parts.
    pub(crate) fn from_parts(name: String, reducer: Reducer<S, A>, initial: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                reducer,
                core: ReentrantMutex::new(Core {
                    state: RefCell::new(initial),
                    listeners: RefCell::new(Registry::new()),
                    reducing: Cell::new(false),
                }),
            }),
        }
    }

    /// Label used in log output.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get a copy of the current state.
    ///
    /// Returns the state produced by the most recent completed dispatch,
    /// or the initial state if nothing was dispatched yet. The copy is
    /// detached from the store; mutating it has no effect on later
    /// dispatches.
    pub fn get_state(&self) -> S {
        let core = self.inner.core.lock();
        let state = core.state.borrow();
        state.clone()
    }

    /// Read the current state without cloning it.
    ///
    /// The store stays locked while `f` runs. Calling `get_state` inside
    /// `f` is fine; calling `dispatch` inside `f` returns
    /// [`StoreError::DispatchWhileReading`] instead of replacing a state
    /// that is still borrowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reduxo::create_store;
    /// use serde_json::{json, Value};
    ///
    /// let store = create_store(
    ///     |state: &Value, _action: &Value| state.clone(),
    ///     json!({"items": [1, 2, 3]}),
    /// )
    /// .unwrap();
    ///
    /// let len = store.with_state(|state| state["items"].as_array().map_or(0, Vec::len));
    /// assert_eq!(len, 3);
    /// ```
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let core = self.inner.core.lock();
        let state = core.state.borrow();
        f(&state)
    }

    /// Apply the reducer to `action` and notify every listener.
    ///
    /// The new state is stored only after the reducer returns, so a
    /// panicking reducer leaves the state as it was and the panic reaches
    /// the caller unchanged. Listeners are called in registration order
    /// from a snapshot taken once the state is updated; listeners added or
    /// removed while notifying only affect later dispatches.
    ///
    /// Keeping the state a record is the reducer's job. A result that fails
    /// [`Record::is_record`] is rejected with
    /// [`StoreError::StateNotRecord`]; the previous state is kept and no
    /// listener runs.
    ///
    /// Returns the dispatched action.
    pub fn dispatch(&self, action: A) -> Result<A, StoreError> {
        let span = tracing::debug_span!("dispatch", store = %self.inner.name);
        let _entered = span.enter();

        if let Err(err) =
            validate::ensure_record(&action, |found| StoreError::ActionNotRecord { found })
        {
            tracing::debug!(%err, "rejected action");
            return Err(err);
        }

        let core = self.inner.core.lock();
        if core.reducing.get() {
            tracing::debug!("rejected dispatch from inside the reducer");
            return Err(StoreError::DispatchInReducer);
        }
        if core.state.try_borrow_mut().is_err() {
            tracing::debug!("rejected dispatch while the state is borrowed");
            return Err(StoreError::DispatchWhileReading);
        }

        let next = {
            core.reducing.set(true);
            let _reset = scopeguard::guard(&core.reducing, |reducing| reducing.set(false));
            let current = core.state.borrow();
            (self.inner.reducer)(&*current, &action)
        };
        if let Err(err) =
            validate::ensure_record(&next, |found| StoreError::StateNotRecord { found })
        {
            tracing::debug!(%err, "rejected reducer result");
            return Err(err);
        }
        *core.state.borrow_mut() = next;

        let listeners = core.listeners.borrow().snapshot();
        tracing::trace!(listeners = listeners.len(), "notifying listeners");
        for listener in &listeners {
            listener();
        }

        Ok(action)
    }

    /// Register a listener called after every dispatch.
    ///
    /// Registering the same closure twice creates two independent
    /// registrations, each notified once per dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Result<Subscription, StoreError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let core = self.inner.core.lock();
        if core.reducing.get() {
            tracing::debug!(store = %self.inner.name, "rejected subscribe from inside the reducer");
            return Err(StoreError::SubscribeInReducer);
        }

        let id = core.listeners.borrow_mut().insert(Arc::new(listener));
        tracing::trace!(store = %self.inner.name, listener = %id, "listener registered");

        let store: Weak<dyn Deregister> = Arc::downgrade(&self.inner) as Weak<dyn Deregister>;
        Ok(Subscription::new(id, store))
    }

    /// Number of active listener registrations.
    pub fn listener_count(&self) -> usize {
        let core = self.inner.core.lock();
        let listeners = core.listeners.borrow();
        listeners.len()
    }
}

impl<S: Record, A: Record> Deregister for Inner<S, A> {
    fn deregister(&self, id: ListenerId) -> bool {
        let core = self.core.lock();
        let removed = core.listeners.borrow_mut().remove(id);
        if removed {
            tracing::trace!(store = %self.name, listener = %id, "listener removed");
        }
        removed
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        let core = self.core.lock();
        let listeners = core.listeners.borrow();
        listeners.contains(id)
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Record, A: Record> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.inner.name)
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
