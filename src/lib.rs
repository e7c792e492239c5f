//! State and event contracts for presentation-layer view models.
//!
//! A view model exposes continuous state through [`StateContainer`] and
//! one-off occurrences through [`EventEmitter`]. Both sit on per-instance
//! tokio channels: `watch` for replay-latest state, `broadcast` for events
//! that are never replayed.

pub mod config;
pub mod contract;
pub mod logging;
pub mod mvi;
pub mod observable;
pub mod samples;
pub mod store;

pub use contract::{EventEmitter, StateContainer};
pub use mvi::{Intent, Reducer, UiState, ViewModelEvent};
pub use observable::{AnyEvent, EventObserver, EventSubject, StateObserver, StateSubject};
pub use store::Store;
