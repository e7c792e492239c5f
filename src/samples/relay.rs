use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::ObservableConfig;
use crate::contract::EventEmitter;
use crate::mvi::ViewModelEvent;
use crate::observable::{EventObserver, EventSubject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildEvent {
    Message { from: String, payload: String },
}

impl ViewModelEvent for ChildEvent {
    fn kind(&self) -> &'static str {
        match self {
            ChildEvent::Message { .. } => "message",
        }
    }
}

/// Event-only view model commanded by a parent.
pub struct ChildViewModel {
    name: String,
    events: EventSubject<ChildEvent>,
}

impl ChildViewModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &ObservableConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: &ObservableConfig) -> Self {
        Self {
            name: name.into(),
            events: EventSubject::with_config(config),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit a message. Returns how many observers it reached.
    pub fn say(&self, payload: impl Into<String>) -> usize {
        self.events.emit(ChildEvent::Message {
            from: self.name.clone(),
            payload: payload.into(),
        })
    }
}

impl EventEmitter for ChildViewModel {
    type Event = ChildEvent;

    fn observe_events(&self) -> EventObserver<ChildEvent> {
        self.events.subscribe()
    }
}

/// Owns two children and can forward the first one's messages to the
/// second. Children are injected, never looked up.
pub struct ParentViewModel {
    first: Arc<ChildViewModel>,
    second: Arc<ChildViewModel>,
    relay: Mutex<Option<JoinHandle<()>>>,
}

impl ParentViewModel {
    pub fn new(first: Arc<ChildViewModel>, second: Arc<ChildViewModel>) -> Self {
        Self {
            first,
            second,
            relay: Mutex::new(None),
        }
    }

    pub fn first(&self) -> &Arc<ChildViewModel> {
        &self.first
    }

    pub fn second(&self) -> &Arc<ChildViewModel> {
        &self.second
    }

    /// Command the first child to emit `payload`.
    pub fn command_child(&self, payload: impl Into<String>) -> usize {
        self.first.say(payload)
    }

    /// Start forwarding every message from the first child to the second
    /// as `relay:<payload>`. Must be called inside a tokio runtime.
    ///
    /// The subscription is taken before this returns, so nothing emitted
    /// afterwards is missed. While a relay is running further calls leave it
    /// in place, keeping messages it has queued but not yet forwarded.
    pub fn relay(&self) {
        let mut slot = self.relay.lock();
        if slot.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let mut source = self.first.observe_events();
        let target = Arc::clone(&self.second);
        *slot = Some(tokio::spawn(async move {
            while let Some(ChildEvent::Message { from, payload }) = source.recv().await {
                tracing::trace!(from = %from, to = %target.name(), "Relaying message");
                target.say(format!("relay:{payload}"));
            }
        }));
    }

    pub fn is_relaying(&self) -> bool {
        self.relay
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn stop_relay(&self) {
        if let Some(handle) = self.relay.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for ParentViewModel {
    fn drop(&mut self) {
        self.stop_relay();
    }
}
