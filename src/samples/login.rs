use std::collections::HashMap;

use crate::config::ObservableConfig;
use crate::contract::{EventEmitter, StateContainer};
use crate::mvi::{UiState, ViewModelEvent};
use crate::observable::{EventObserver, EventSubject, StateObserver, StateSubject};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginState {
    /// Signed-in user, if any.
    pub username: Option<String>,
    pub failed_attempts: u32,
}

impl UiState for LoginState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Succeeded { username: String },
    Failed { message: String },
}

impl ViewModelEvent for LoginEvent {
    fn kind(&self) -> &'static str {
        match self {
            LoginEvent::Succeeded { .. } => "succeeded",
            LoginEvent::Failed { .. } => "failed",
        }
    }
}

/// View model behind a login form.
///
/// Exposes the signed-in user as state and each attempt's outcome as a
/// one-off event. A rejected attempt is an event, never an error.
pub struct LoginViewModel {
    state: StateSubject<LoginState>,
    events: EventSubject<LoginEvent>,
    credentials: HashMap<String, String>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::with_config(&ObservableConfig::default())
    }

    pub fn with_config(config: &ObservableConfig) -> Self {
        let credentials = HashMap::from([("cat".to_string(), "meow".to_string())]);
        Self {
            state: StateSubject::default(),
            events: EventSubject::with_config(config),
            credentials,
        }
    }

    pub fn login(&self, username: &str, password: &str) {
        let accepted = self
            .credentials
            .get(username)
            .is_some_and(|expected| expected == password);

        if accepted {
            self.state.update(|state| {
                state.username = Some(username.to_string());
                state.failed_attempts = 0;
            });
            tracing::debug!(username, "Login accepted");
            self.events.emit(LoginEvent::Succeeded {
                username: username.to_string(),
            });
        } else {
            self.state.update(|state| {
                state.failed_attempts = state.failed_attempts.saturating_add(1);
            });
            tracing::debug!(username, "Login rejected");
            self.events.emit(LoginEvent::Failed {
                message: "Invalid password".to_string(),
            });
        }
    }

    pub fn logout(&self) {
        self.state.update(|state| state.username = None);
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StateContainer for LoginViewModel {
    type State = LoginState;

    fn current_state(&self) -> LoginState {
        self.state.get()
    }

    fn observe_state(&self) -> StateObserver<LoginState> {
        self.state.subscribe()
    }
}

impl EventEmitter for LoginViewModel {
    type Event = LoginEvent;

    fn observe_events(&self) -> EventObserver<LoginEvent> {
        self.events.subscribe()
    }
}
