//! Base trait for store state.

use std::fmt::Debug;

/// Marker trait for state held by a store or one of its branches.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything an observer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Debug + Default + Send + Sync + 'static {}
