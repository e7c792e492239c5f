//! Reducer-driven state container.

use std::marker::PhantomData;

use crate::contract::StateContainer;
use crate::mvi::Reducer;
use crate::observable::{StateObserver, StateSubject};

/// State container whose only mutation path is [`dispatch`](Self::dispatch).
///
/// Each intent runs through `R::reduce` under the subject's write lock, so
/// intents dispatched from several threads are applied one after another.
pub struct Store<R: Reducer> {
    subject: StateSubject<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            subject: StateSubject::new(initial),
            _reducer: PhantomData,
        }
    }

    /// Apply `intent`. Returns whether the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        let changed = self.subject.replace_with(|state| R::reduce(state, intent));
        tracing::trace!(
            store = %self.subject.id(),
            intent = std::any::type_name::<R::Intent>(),
            changed,
            "Intent dispatched"
        );
        changed
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> StateContainer for Store<R> {
    type State = R::State;

    fn current_state(&self) -> Self::State {
        self.subject.get()
    }

    fn observe_state(&self) -> StateObserver<Self::State> {
        self.subject.subscribe()
    }
}
