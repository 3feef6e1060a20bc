//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions are immutable descriptions of an intended state change. They
/// carry no behaviour: all semantics live in the reducer that consumes them.
pub trait Action: Clone + Debug + Send + Sync + 'static {
    /// Stable wire name of the action's kind, used for logging.
    fn kind_name(&self) -> &'static str;
}
