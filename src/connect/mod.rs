//! Binds any state consumer to a store's lifecycle.
//!
//! A consumer implements [`StateObserver`]; a [`Connector`] wraps it and
//! owns the subscription:
//!
//! - `attach`: subscribe, then deliver the current state once
//! - every dispatch: deliver the full current state
//! - `detach` (or drop): unsubscribe, no further deliveries
//!
//! The registered listener only holds weak references to the consumer and
//! the store, so neither is kept alive through the listener registry.
//!
//! Every delivery reads the state under a per-connector gate, so a consumer
//! never receives an older state after a newer one, even when another thread
//! dispatches while `attach` is running.

use std::sync::{Arc, Weak};

use parking_lot::ReentrantMutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::mvi::Reducer;
use crate::store::{Store, Subscription};

/// The single override point for a connected consumer.
pub trait StateObserver<S>: Send + Sync + 'static {
    fn state_changed(&self, state: &S);
}

/// Composition wrapper that attaches a consumer to a store.
pub struct Connector<C> {
    consumer: Arc<C>,
    subscription: Option<Subscription>,
    // Reentrant: a consumer may dispatch from `state_changed`.
    delivery: Arc<ReentrantMutex<()>>,
}

impl<C> Connector<C> {
    pub fn new(consumer: Arc<C>) -> Self {
        Self {
            consumer,
            subscription: None,
            delivery: Arc::new(ReentrantMutex::new(())),
        }
    }

    pub fn consumer(&self) -> &Arc<C> {
        &self.consumer
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe the consumer and sync it with the current state.
    ///
    /// Attaching an already attached connector moves it to `store`.
    pub fn attach<R>(&mut self, store: &Store<R>)
    where
        R: Reducer,
        R::State: Serialize + DeserializeOwned,
        C: StateObserver<R::State>,
    {
        self.detach();

        let consumer: Weak<C> = Arc::downgrade(&self.consumer);
        let weak_store = store.downgrade();
        let delivery = Arc::clone(&self.delivery);
        self.subscription = Some(store.subscribe(move || {
            let (Some(consumer), Some(store)) = (consumer.upgrade(), weak_store.upgrade()) else {
                return;
            };
            let _gate = delivery.lock();
            consumer.state_changed(&store.get_state());
        }));

        let _gate = self.delivery.lock();
        self.consumer.state_changed(&store.get_state());
    }

    /// Unsubscribe. No-op when not attached.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<C> Drop for Connector<C> {
    fn drop(&mut self) {
        self.detach();
    }
}
