use crate::contract::StateContainer;
use crate::mvi::{Intent, Reducer, UiState};
use crate::observable::StateObserver;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

#[derive(Debug, Clone)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
}

impl Intent for CounterIntent {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
            CounterIntent::Reset => CounterState::default(),
        }
    }
}

/// State-only view model holding a single counter.
#[derive(Default)]
pub struct CounterViewModel {
    store: Store<CounterReducer>,
}

impl CounterViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(state: CounterState) -> Self {
        Self {
            store: Store::new(state),
        }
    }

    pub fn increment(&self) {
        self.store.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.store.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&self) {
        self.store.dispatch(CounterIntent::Reset);
    }
}

impl StateContainer for CounterViewModel {
    type State = CounterState;

    fn current_state(&self) -> CounterState {
        self.store.current_state()
    }

    fn observe_state(&self) -> StateObserver<CounterState> {
        self.store.observe_state()
    }
}
