//! Reducer trait.

use super::action::Action;
use super::state::SliceState;

/// Reducer folds an action into a state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a total, pure function: (State, &Action) -> State.
/// Actions a reducer does not handle return the input state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer consumes.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// The action is borrowed because every slice reducer sees the same
    /// message during a single dispatch.
    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;
}
