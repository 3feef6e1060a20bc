//! Listener registry and subscription handles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Zero-argument change callback. Listeners pull state via `get_state()`.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Identity of one registration. Subscribing the same callback twice yields
/// two distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: AtomicU64,
    entries: Mutex<Vec<(ListenerId, Listener)>>,
}

impl ListenerRegistry {
    pub(crate) fn add(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().push((id, listener));
        id
    }

    /// Returns false if `id` was already gone.
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        entries.len() != before
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.entries.lock().iter().any(|(existing, _)| *existing == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Invoke every listener in subscription order.
    ///
    /// The lock is not held while a listener runs, so listeners may
    /// subscribe, unsubscribe or dispatch. A listener removed earlier in the
    /// same pass is skipped.
    pub(crate) fn notify(&self) {
        let snapshot: Vec<(ListenerId, Listener)> = self
            .entries
            .lock()
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.contains(id) {
                listener();
            }
        }
    }
}

/// Handle returned by `Store::subscribe`.
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
/// The handle holds only a weak reference to the registry, so it never keeps
/// a store alive.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    registry: Weak<ListenerRegistry>,
    id: ListenerId,
}

impl Subscription {
    pub(crate) fn new(registry: &Arc<ListenerRegistry>, id: ListenerId) -> Self {
        Self {
            registry: Arc::downgrade(registry),
            id,
        }
    }

    /// Remove exactly this registration. Safe to call more than once.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }

    /// Whether this registration is still receiving notifications.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn notify_calls_in_order() {
        let registry = Arc::new(ListenerRegistry::default());
        let log = Arc::new(Mutex::new(Vec::new()));
        for n in 1..=3 {
            let log = Arc::clone(&log);
            registry.add(Arc::new(move || log.lock().push(n)));
        }
        registry.notify();
        assert_eq!(*log.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn same_callback_registered_twice_runs_twice() {
        let registry = Arc::new(ListenerRegistry::default());
        let count = Arc::new(AtomicUsize::new(0));
        let listener: Listener = {
            let count = Arc::clone(&count);
            Arc::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        let first = registry.add(Arc::clone(&listener));
        registry.add(listener);
        registry.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(registry.remove(first));
        assert!(!registry.remove(first));
        registry.notify();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn listener_removed_mid_pass_is_skipped() {
        let registry = Arc::new(ListenerRegistry::default());
        let hits = Arc::new(AtomicUsize::new(0));
        let victim = Arc::new(Mutex::new(None::<ListenerId>));

        {
            let registry_weak = Arc::downgrade(&registry);
            let victim = Arc::clone(&victim);
            registry.add(Arc::new(move || {
                if let (Some(registry), Some(id)) = (registry_weak.upgrade(), *victim.lock()) {
                    registry.remove(id);
                }
            }));
        }
        let hits_clone = Arc::clone(&hits);
        let id = registry.add(Arc::new(move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        }));
        *victim.lock() = Some(id);

        registry.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn subscription_outliving_registry_is_inert() {
        let registry = Arc::new(ListenerRegistry::default());
        let id = registry.add(Arc::new(|| {}));
        let subscription = Subscription::new(&registry, id);
        assert!(subscription.is_active());
        drop(registry);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }
}
