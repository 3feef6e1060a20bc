//! Store: state container, listener registry and durable persistence.

mod listeners;
pub mod snapshot;
mod state_store;
pub mod storage;

pub use listeners::{Listener, ListenerId, Subscription};
pub use snapshot::{SnapshotError, SNAPSHOT_VERSION};
pub use state_store::{Store, WeakStore, DEFAULT_STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
