//! Unidirectional data-flow primitives shared by the store and its reducers.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observer
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every transition
//! - **Action**: Plain `{ kind, payload }` record describing a change
//! - **Reducer**: Pure function that computes the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
