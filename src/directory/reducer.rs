//! Reducers for the employee directory.
//!
//! Every action is routed to both branch reducers; each one ignores the
//! kinds it does not own.

use crate::mvi::Reducer;

use super::action::DirectoryAction;
use super::model::{ApplicationState, Employee, ViewState};

/// Transitions for the employee collection.
#[derive(Default)]
pub struct EmployeesReducer;

impl Reducer for EmployeesReducer {
    type State = Vec<Employee>;
    type Action = DirectoryAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            // Duplicate ids are the caller's problem.
            DirectoryAction::AddEmployee(employee) => {
                let mut next = Vec::with_capacity(state.len() + 1);
                next.extend_from_slice(state);
                next.push(employee.clone());
                next
            }

            DirectoryAction::UpdateEmployee(employee) => {
                let mut next = state.clone();
                if let Some(slot) = next.iter_mut().find(|e| e.id == employee.id) {
                    *slot = employee.clone();
                }
                next
            }

            DirectoryAction::DeleteEmployee(id) => {
                state.iter().filter(|e| &e.id != id).cloned().collect()
            }

            _ => state.clone(),
        }
    }
}

/// Transitions for search, pagination and layout.
#[derive(Default)]
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Action = DirectoryAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            // A new filter invalidates the old page position.
            DirectoryAction::SetSearchTerm(term) => ViewState {
                search_term: term.clone(),
                current_page: 1,
                ..state.clone()
            },

            DirectoryAction::SetCurrentPage(page) => ViewState {
                current_page: *page,
                ..state.clone()
            },

            DirectoryAction::SetViewMode(mode) => ViewState {
                view_mode: *mode,
                ..state.clone()
            },

            _ => state.clone(),
        }
    }
}

/// Root reducer: `{ employees, ui }` reassembled from both branches.
#[derive(Default)]
pub struct RootReducer {
    employees: EmployeesReducer,
    ui: ViewReducer,
}

impl RootReducer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reducer for RootReducer {
    type State = ApplicationState;
    type Action = DirectoryAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        ApplicationState {
            employees: self.employees.reduce(&state.employees, action),
            ui: self.ui.reduce(&state.ui, action),
        }
    }
}
