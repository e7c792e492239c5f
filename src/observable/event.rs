//! Stateless, replay-none publish point for one-off events.

use futures_core::Stream;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tokio_stream::StreamExt;
use uuid::Uuid;

use crate::config::ObservableConfig;
use crate::mvi::ViewModelEvent;

/// Owner side of an event stream.
///
/// Keeps no current value: an event reaches only the observers subscribed
/// at the moment it is emitted, in emission order.
pub struct EventSubject<E: ViewModelEvent> {
    id: Uuid,
    tx: broadcast::Sender<E>,
    log_lagged: bool,
}

impl<E: ViewModelEvent> EventSubject<E> {
    /// `capacity` bounds how far a single observer may fall behind before
    /// its oldest undelivered events are dropped. Zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, true)
    }

    pub fn with_config(config: &ObservableConfig) -> Self {
        Self::build(config.event_capacity, config.log_lagged_events)
    }

    fn build(capacity: usize, log_lagged: bool) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        let id = Uuid::new_v4();
        tracing::debug!(
            subject = %id,
            event = std::any::type_name::<E>(),
            capacity,
            "Event subject created"
        );
        Self { id, tx, log_lagged }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Deliver `event` to every current observer. Never blocks.
    ///
    /// Returns the number of observers it was queued for; with no observers
    /// the event is dropped and 0 is returned.
    pub fn emit(&self, event: E) -> usize {
        let kind = event.kind();
        let delivered = self.tx.send(event).unwrap_or(0);
        tracing::trace!(subject = %self.id, kind, delivered, "Event emitted");
        delivered
    }

    pub fn subscribe(&self) -> EventObserver<E> {
        EventObserver {
            subject: self.id,
            rx: self.tx.subscribe(),
            log_lagged: self.log_lagged,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<E: ViewModelEvent> Default for EventSubject<E> {
    fn default() -> Self {
        Self::with_config(&ObservableConfig::default())
    }
}

/// Read side of an event stream.
///
/// Sees only events emitted after it subscribed. If it falls more than the
/// subject's capacity behind, the oldest missed events are skipped for this
/// observer alone and delivery continues in order.
pub struct EventObserver<E: ViewModelEvent> {
    subject: Uuid,
    rx: broadcast::Receiver<E>,
    log_lagged: bool,
}

impl<E: ViewModelEvent> EventObserver<E> {
    /// Wait for the next event. `None` once the emitter is gone and the
    /// queue is drained.
    pub async fn recv(&mut self) -> Option<E> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Closed) => return None,
                Err(RecvError::Lagged(skipped)) => self.report_lag(skipped),
            }
        }
    }

    /// Next queued event, if any, without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
                Err(TryRecvError::Lagged(skipped)) => self.report_lag(skipped),
            }
        }
    }

    /// Wait for the first event `f` maps to `Some`, silently skipping the
    /// shapes it rejects.
    pub async fn recv_map<T, F>(&mut self, mut f: F) -> Option<T>
    where
        F: FnMut(E) -> Option<T>,
    {
        loop {
            let event = self.recv().await?;
            if let Some(mapped) = f(event) {
                return Some(mapped);
            }
        }
    }

    /// Wait for the next event tagged `kind`.
    pub async fn recv_kind(&mut self, kind: &str) -> Option<E> {
        self.recv_map(|event| (event.kind() == kind).then_some(event))
            .await
    }

    pub fn into_stream(self) -> impl Stream<Item = E> + Send + Unpin {
        let subject = self.subject;
        let log_lagged = self.log_lagged;
        BroadcastStream::new(self.rx).filter_map(move |item| match item {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                if log_lagged {
                    tracing::warn!(subject = %subject, skipped, "Event observer lagged");
                }
                None
            }
        })
    }

    fn report_lag(&self, skipped: u64) {
        if self.log_lagged {
            tracing::warn!(subject = %self.subject, skipped, "Event observer lagged");
        }
    }
}
