//! Reactive substrate behind the view model contracts.
//!
//! Two publish points, both per-instance and multicast:
//!
//! | Primitive        | Backing channel     | Current value | Replay on subscribe |
//! |------------------|---------------------|---------------|---------------------|
//! | [`StateSubject`] | `tokio::sync::watch`     | always        | latest value        |
//! | [`EventSubject`] | `tokio::sync::broadcast` | never         | none                |
//!
//! Unsubscribing is dropping the observer. Dropping the subject completes
//! every observer still attached to it.

mod any_event;
mod event;
mod state;

pub use any_event::AnyEvent;
pub use event::{EventObserver, EventSubject};
pub use state::{StateObserver, StateSubject};
