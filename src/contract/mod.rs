//! The two view model contracts a UI layer depends on.
//!
//! A view model implements [`StateContainer`], [`EventEmitter`], or both.
//! Mutation and emission are not part of either contract: they happen in
//! the implementer's own command methods, and the contracts only govern
//! how the results are observed.

mod event_emitter;
mod state_container;

pub use event_emitter::EventEmitter;
pub use state_container::StateContainer;
