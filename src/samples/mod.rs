//! Reference view models.
//!
//! Small, complete implementations of the contracts, used by the demo
//! binary and the integration tests.

mod counter;
mod login;
mod relay;

pub use counter::{CounterIntent, CounterReducer, CounterState, CounterViewModel};
pub use login::{LoginEvent, LoginState, LoginViewModel};
pub use relay::{ChildEvent, ChildViewModel, ParentViewModel};
