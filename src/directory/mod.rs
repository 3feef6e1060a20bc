//! Employee directory domain: model, action vocabulary, reducers.
//!
//! Uses the unidirectional flow from [`crate::mvi`]:
//! - `model.rs` - Employee, view state and the root aggregate
//! - `action.rs` - Closed action vocabulary and constructors
//! - `reducer.rs` - Pure transitions, composed into [`RootReducer`]
//! - `listing.rs` - Filtered, paginated projection for the list view
//! - `seed.rs` - Sample data for a fresh install

pub mod action;
pub mod listing;
mod model;
mod reducer;
pub mod seed;

pub use action::{
    add_employee, delete_employee, set_current_page, set_search_term, set_view_mode,
    update_employee, ActionKind, DirectoryAction,
};
pub use listing::{Listing, ListingObserver, DEFAULT_PAGE_SIZE};
pub use model::{
    ApplicationState, Department, Employee, EmployeeId, Position, UnknownVariant, ViewMode,
    ViewState,
};
pub use reducer::{EmployeesReducer, RootReducer, ViewReducer};

/// The application's store type.
pub type DirectoryStore = crate::store::Store<RootReducer>;
