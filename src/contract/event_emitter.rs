use std::sync::Arc;

use crate::mvi::ViewModelEvent;
use crate::observable::EventObserver;

/// Exposes a fire-and-forget stream of discrete, tagged occurrences.
///
/// Failures are ordinary events too: a view model reports "wrong password"
/// by emitting a failure-tagged event, not by returning an error.
pub trait EventEmitter {
    type Event: ViewModelEvent;

    /// Multicast stream with no replay. The observer receives only events
    /// emitted after this call, in the order they were emitted. The stream
    /// never errors and ends only when the emitter is dropped.
    fn observe_events(&self) -> EventObserver<Self::Event>;
}

impl<T: EventEmitter + ?Sized> EventEmitter for Arc<T> {
    type Event = T::Event;

    fn observe_events(&self) -> EventObserver<Self::Event> {
        (**self).observe_events()
    }
}
