//! Single-store, reducer-based state core for an employee directory.
//!
//! ```text
//! dispatch(action) ─→ RootReducer ─→ new state ─→ persist ─→ notify listeners
//!                                                                │
//!                          Connector ─→ StateObserver::state_changed(state)
//! ```

pub mod config;
pub mod connect;
pub mod directory;
pub mod logging;
pub mod mvi;
pub mod store;
