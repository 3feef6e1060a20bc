//! Derived display state for the employee list.
//!
//! Recomputed from scratch on every state change; never stored.

use parking_lot::Mutex;

use super::model::{ApplicationState, Employee, ViewMode};
use crate::connect::StateObserver;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One rendered page of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub rows: Vec<Employee>,
    pub search_term: String,
    pub view_mode: ViewMode,
    /// Page shown, clamped to `1..=total_pages`.
    pub page: u32,
    /// Page stored in state, which may exceed `total_pages`.
    pub requested_page: u32,
    pub total_pages: u32,
    pub total_matches: usize,
}

impl Listing {
    pub fn project(state: &ApplicationState, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let matches: Vec<&Employee> = state
            .employees
            .iter()
            .filter(|e| matches_search(e, &state.ui.search_term))
            .collect();

        let total_pages = matches.len().div_ceil(page_size) as u32;
        let page = state.ui.current_page.clamp(1, total_pages.max(1));
        let start = (page as usize - 1) * page_size;

        Self {
            rows: matches
                .iter()
                .skip(start)
                .take(page_size)
                .map(|e| (*e).clone())
                .collect(),
            search_term: state.ui.search_term.clone(),
            view_mode: state.ui.view_mode,
            page,
            requested_page: state.ui.current_page,
            total_pages,
            total_matches: matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Case-insensitive substring match on first name, last name and email.
/// An empty term matches everyone.
pub fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&employee.first_name, &employee.last_name, &employee.email]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Connected consumer that keeps the latest [`Listing`].
pub struct ListingObserver {
    page_size: usize,
    latest: Mutex<Listing>,
    updates: Mutex<usize>,
}

impl ListingObserver {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            latest: Mutex::new(Listing::default()),
            updates: Mutex::new(0),
        }
    }

    pub fn latest(&self) -> Listing {
        self.latest.lock().clone()
    }

    /// Number of state deliveries received so far.
    pub fn updates(&self) -> usize {
        *self.updates.lock()
    }
}

impl StateObserver<ApplicationState> for ListingObserver {
    fn state_changed(&self, state: &ApplicationState) {
        *self.latest.lock() = Listing::project(state, self.page_size);
        *self.updates.lock() += 1;
    }
}
