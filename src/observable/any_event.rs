//! Type-erased events for open event sets.

use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::mvi::ViewModelEvent;

/// Object-safe view of a [`ViewModelEvent`].
trait ErasedEvent: Debug + Send + Sync {
    fn kind(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<E: ViewModelEvent> ErasedEvent for E {
    fn kind(&self) -> &'static str {
        ViewModelEvent::kind(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An event of any concrete shape, shared behind one element type.
///
/// Lets unrelated event types travel on a single `EventSubject<AnyEvent>`.
/// Consumers narrow with [`downcast_ref`](Self::downcast_ref); a shape that
/// does not match yields `None` and can simply be ignored.
#[derive(Clone)]
pub struct AnyEvent(Arc<dyn ErasedEvent>);

impl AnyEvent {
    pub fn new<E: ViewModelEvent>(event: E) -> Self {
        Self(Arc::new(event))
    }

    /// Runtime tag of the wrapped event.
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    pub fn is<E: ViewModelEvent>(&self) -> bool {
        (*self.0).as_any().is::<E>()
    }

    pub fn downcast_ref<E: ViewModelEvent>(&self) -> Option<&E> {
        (*self.0).as_any().downcast_ref::<E>()
    }
}

impl Debug for AnyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyEvent").field(&self.0).finish()
    }
}

impl ViewModelEvent for AnyEvent {
    fn kind(&self) -> &'static str {
        self.0.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Saved {
        id: u32,
    }

    impl ViewModelEvent for Saved {
        fn kind(&self) -> &'static str {
            "saved"
        }
    }

    #[derive(Debug, Clone)]
    struct Closed;

    impl ViewModelEvent for Closed {}

    #[test]
    fn downcast_matches_concrete_shape() {
        let event = AnyEvent::new(Saved { id: 7 });
        assert!(event.is::<Saved>());
        assert_eq!(event.downcast_ref::<Saved>(), Some(&Saved { id: 7 }));
    }

    #[test]
    fn downcast_to_other_shape_is_none() {
        let event = AnyEvent::new(Closed);
        assert!(!event.is::<Saved>());
        assert!(event.downcast_ref::<Saved>().is_none());
    }

    #[test]
    fn kind_uses_override_or_type_name() {
        assert_eq!(AnyEvent::new(Saved { id: 1 }).kind(), "saved");
        assert!(AnyEvent::new(Closed).kind().ends_with("Closed"));
    }
}
