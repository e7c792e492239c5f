use std::sync::Arc;

use crate::mvi::UiState;
use crate::observable::StateObserver;

/// Exposes one continuously observable snapshot.
pub trait StateContainer {
    type State: UiState;

    /// Latest snapshot. Synchronous, non-blocking, infallible.
    fn current_state(&self) -> Self::State;

    /// Multicast, replay-latest view of the snapshot: the first value
    /// delivered equals [`current_state`](Self::current_state) at subscribe
    /// time, followed by every later distinct value in the order applied.
    /// Fast bursts may coalesce; the value left after a burst is delivered.
    fn observe_state(&self) -> StateObserver<Self::State>;
}

impl<T: StateContainer + ?Sized> StateContainer for Arc<T> {
    type State = T::State;

    fn current_state(&self) -> Self::State {
        (**self).current_state()
    }

    fn observe_state(&self) -> StateObserver<Self::State> {
        (**self).observe_state()
    }
}
