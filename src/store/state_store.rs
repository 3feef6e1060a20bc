//! The single source of truth: reduce, persist, notify.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::mvi::{Action, Reducer};
use crate::store::listeners::{ListenerRegistry, Subscription};
use crate::store::snapshot;
use crate::store::storage::KeyValueStorage;

/// Storage slot the full state is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "employeeState";

/// Actions waiting for the current dispatch pass to finish.
struct PendingDispatch<A> {
    queue: VecDeque<A>,
    draining: bool,
}

struct StoreInner<R: Reducer> {
    reducer: R,
    state: RwLock<Arc<R::State>>,
    listeners: Arc<ListenerRegistry>,
    pending: Mutex<PendingDispatch<R::Action>>,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

/// Reducer-driven state container.
///
/// Cloning the handle is cheap and every clone addresses the same state.
/// Build exactly one per application and pass clones to consumers.
///
/// # Dispatch ordering
///
/// `dispatch` is synchronous: reduce, persist, then notify listeners in
/// subscription order. A dispatch issued while another one is in progress
/// (from inside a listener, or from another thread) is queued and applied
/// by the in-progress call once its notification pass completes. The queued
/// call returns immediately; the outermost call returns after the queue is
/// empty.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Non-owning store handle, for listeners that must not keep the store alive.
pub struct WeakStore<R: Reducer> {
    inner: Weak<StoreInner<R>>,
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R: Reducer> WeakStore<R> {
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Serialize + DeserializeOwned,
{
    /// Create a store persisting under [`DEFAULT_STORAGE_KEY`].
    ///
    /// A snapshot already present in `storage` replaces `initial_state`
    /// wholesale. A missing or unreadable snapshot falls back to
    /// `initial_state`; failures are logged, never returned.
    pub fn new(reducer: R, initial_state: R::State, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(reducer, initial_state, storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(
        reducer: R,
        initial_state: R::State,
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let state = restore(storage.as_ref(), &key, initial_state);

        Self {
            inner: Arc::new(StoreInner {
                reducer,
                state: RwLock::new(Arc::new(state)),
                listeners: Arc::new(ListenerRegistry::default()),
                pending: Mutex::new(PendingDispatch {
                    queue: VecDeque::new(),
                    draining: false,
                }),
                storage,
                key,
            }),
        }
    }

    /// Current state. Shared, not copied; the snapshot is immutable.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&*self.inner.state.read())
    }

    /// Apply `action`, persist, notify, and hand the action back.
    ///
    /// Never fails: persistence errors are logged and the in-memory state
    /// stays authoritative.
    pub fn dispatch(&self, action: R::Action) -> R::Action {
        let returned = action.clone();
        {
            let mut pending = self.inner.pending.lock();
            pending.queue.push_back(action);
            if pending.draining {
                tracing::debug!(kind = returned.kind_name(), "Queued nested dispatch");
                return returned;
            }
            pending.draining = true;
        }

        // A panicking listener must not wedge the store in draining mode.
        // Whatever is still queued runs on the next dispatch.
        let _unwind = scopeguard::guard_on_unwind((), |()| {
            self.inner.pending.lock().draining = false;
        });

        loop {
            let next = {
                let mut pending = self.inner.pending.lock();
                match pending.queue.pop_front() {
                    Some(next) => next,
                    None => {
                        pending.draining = false;
                        break;
                    }
                }
            };
            self.apply(next);
        }

        returned
    }

    /// Register a listener, called with no arguments after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.listeners.add(Arc::new(listener));
        Subscription::new(&self.inner.listeners, id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn apply(&self, action: R::Action) {
        let next = {
            let mut state = self.inner.state.write();
            let next = Arc::new(self.inner.reducer.reduce(&**state, &action));
            *state = Arc::clone(&next);
            next
        };
        tracing::debug!(kind = action.kind_name(), "Dispatched action");

        self.persist(&next);
        self.inner.listeners.notify();
    }

    fn persist(&self, state: &R::State) {
        let key = self.inner.key.as_str();
        let result = snapshot::encode(state)
            .map_err(|e| e.to_string())
            .and_then(|blob| {
                self.inner
                    .storage
                    .set(key, &blob)
                    .map_err(|e| e.to_string())
            });

        if let Err(error) = result {
            tracing::warn!(key, %error, "Failed to save state");
        }
    }
}

fn restore<S: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str, initial: S) -> S {
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return initial,
        Err(error) => {
            tracing::warn!(key, %error, "Failed to load state");
            return initial;
        }
    };

    match snapshot::decode::<S>(&blob) {
        Ok(decoded) => {
            tracing::info!(
                key,
                version = decoded.version,
                upgrade = decoded.needs_upgrade(),
                "Restored persisted state"
            );
            decoded.state
        }
        Err(error) => {
            tracing::warn!(key, %error, "Failed to load state");
            initial
        }
    }
}
