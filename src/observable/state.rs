//! Stateful, replay-latest publish point for view model state.

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use crate::mvi::UiState;

/// Owner side of a state stream.
///
/// Holds exactly one current value. Writers go through the channel's
/// internal lock, so concurrent `set`/`update` calls are applied one at a
/// time and observers always see a value that was actually stored.
pub struct StateSubject<S: UiState> {
    id: Uuid,
    tx: watch::Sender<S>,
}

impl<S: UiState> StateSubject<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        let id = Uuid::new_v4();
        tracing::debug!(
            subject = %id,
            state = std::any::type_name::<S>(),
            "State subject created"
        );
        Self { id, tx }
    }

    /// Instance identifier, used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Clone of the current snapshot. Never blocks on observers.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Store `value`. Observers are notified only if it differs from the
    /// current snapshot. Returns whether a notification went out.
    pub fn set(&self, value: S) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
        self.trace_change(changed);
        changed
    }

    /// Mutate the snapshot in place, notifying only on an actual change.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        let changed = self.tx.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        });
        self.trace_change(changed);
        changed
    }

    /// Replace the snapshot with `f(current)`, notifying only on change.
    pub fn replace_with<F>(&self, f: F) -> bool
    where
        F: FnOnce(S) -> S,
    {
        let changed = self.tx.send_if_modified(|current| {
            let next = f(current.clone());
            if next == *current {
                return false;
            }
            *current = next;
            true
        });
        self.trace_change(changed);
        changed
    }

    /// New observer. Its first [`StateObserver::next`] yields the value
    /// current right now.
    pub fn subscribe(&self) -> StateObserver<S> {
        StateObserver::new(self.tx.subscribe())
    }

    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn trace_change(&self, changed: bool) {
        tracing::trace!(
            subject = %self.id,
            changed,
            observers = self.tx.receiver_count(),
            "State updated"
        );
    }
}

impl<S: UiState> Default for StateSubject<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Read side of a state stream.
///
/// Delivery is replay-latest: the value current at subscription time comes
/// first, then every later distinct value. Updates that land faster than the
/// observer polls may coalesce, but the value left after a burst is always
/// delivered.
pub struct StateObserver<S: UiState> {
    rx: watch::Receiver<S>,
    last: Option<S>,
}

impl<S: UiState> StateObserver<S> {
    fn new(rx: watch::Receiver<S>) -> Self {
        Self { rx, last: None }
    }

    /// Latest stored value, without consuming a notification.
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Whether [`next`](Self::next) would yield a value without waiting.
    ///
    /// A burst that settles back on the last delivered value reports
    /// `false`, matching `next`, which skips it.
    pub fn has_changed(&self) -> bool {
        let Some(last) = &self.last else {
            return true;
        };
        if !self.rx.has_changed().unwrap_or(false) {
            return false;
        }
        *self.rx.borrow() != *last
    }

    /// Wait for the next value to deliver.
    ///
    /// Returns `None` once the owning subject is dropped and nothing is
    /// left to deliver.
    pub async fn next(&mut self) -> Option<S> {
        if self.last.is_none() {
            let value = self.rx.borrow_and_update().clone();
            self.last = Some(value.clone());
            return Some(value);
        }

        loop {
            self.rx.changed().await.ok()?;
            let value = self.rx.borrow_and_update().clone();
            // A -> B -> A inside one burst collapses back to A.
            if self.last.as_ref() != Some(&value) {
                self.last = Some(value.clone());
                return Some(value);
            }
        }
    }

    /// Convert into a `Stream` with the same delivery rules as
    /// [`next`](Self::next): the current value first unless this observer
    /// already delivered it, then distinct values only.
    pub fn into_stream(self) -> impl Stream<Item = S> + Send {
        let mut last = self.last;
        WatchStream::new(self.rx).filter_map(move |value| {
            if last.as_ref() == Some(&value) {
                return None;
            }
            last = Some(value.clone());
            Some(value)
        })
    }
}

impl<S: UiState> Clone for StateObserver<S> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
            last: self.last.clone(),
        }
    }
}
