//! Commands and the pure transitions they drive.

use super::state::UiState;

/// Marker for a command handed to a view model.
///
/// Commands are ordinary values: a UI action, a parent view model telling a
/// child what to do, a completed background call.
pub trait Intent: Send + 'static {}

/// Maps `(State, Intent)` to the next state.
///
/// [`Store`](crate::store::Store) is the only caller: it runs `reduce` while
/// holding the state lock and publishes the result if it differs from the
/// previous snapshot. Keep it free of I/O and event emission.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
