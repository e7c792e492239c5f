use serde::{Deserialize, Serialize};

/// Tunables for the reactive substrate.
///
/// Read from an `[observable]` table:
///
/// ```toml
/// [observable]
/// event_capacity = 128
/// log_lagged_events = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservableConfig {
    /// Events buffered per emitter before slow observers start dropping
    /// the oldest ones.
    pub event_capacity: usize,
    /// Emit a `warn` line when an observer lags.
    pub log_lagged_events: bool,
}

impl Default for ObservableConfig {
    fn default() -> Self {
        Self {
            event_capacity: 64,
            log_lagged_events: true,
        }
    }
}

/// On-disk file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ConfigFile {
    pub observable: ObservableConfig,
}
