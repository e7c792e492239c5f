//! Model-View-Intent (MVI) primitives shared by every view model.
//!
//! # Architecture
//!
//! ```text
//!          ┌──── Intent ────┐
//!          │                ▼
//!        View           ViewModel ──(Reducer)──→ State ──→ View  (replay-latest)
//!                           └─────────────────→ Event ──→ View  (no replay)
//! ```
//!
//! State is the full picture a view renders and always has a current value.
//! Events are one-off occurrences such as navigation, alerts, or failures;
//! they are never stored.

mod event;
mod reducer;
mod state;

pub use event::ViewModelEvent;
pub use reducer::{Intent, Reducer};
pub use state::UiState;
