//! Base trait for one-off view model events.

use std::any::Any;
use std::fmt::Debug;

/// Marker trait for events emitted by a view model.
///
/// Events are fire-and-forget: nothing retains the "current event" once it
/// has been delivered. Several event shapes may share one stream, so each
/// event reports a runtime `kind` that consumers match on. Shapes a consumer
/// does not recognise are skipped, never treated as errors.
///
/// Closed sets are plain enums overriding [`kind`](Self::kind) per variant.
/// Open sets travel as [`AnyEvent`](crate::observable::AnyEvent) and are
/// narrowed with a downcast.
pub trait ViewModelEvent: Any + Debug + Clone + Send + Sync + 'static {
    /// Discriminant used for narrowing. Defaults to the Rust type name.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
