//! Reducer trait.

use super::action::Action;
use super::state::StoreState;

/// Reducer computes the next state from the current state and an action.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: no I/O, no clock, no randomness. The current state is
/// borrowed, so it can never be mutated in place; branches that an action
/// does not touch are cloned through unchanged.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer understands.
    type Action: Action;

    /// Process an action and return the new state.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
