use serde::{Deserialize, Serialize};

use crate::interval::RefreshInterval;

/// Snapshot of what a controller holds.
///
/// The default is the safe state: no periodic refresh, no user changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerState {
    pub selected: RefreshInterval,
    pub readonly: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            selected: RefreshInterval::Off,
            readonly: true,
        }
    }
}

/// What a call to `select` did.
///
/// Informational only. None of the non-`Changed` outcomes is an error, and
/// none of them notifies subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection moved. Subscribers were notified if the controller is mounted.
    Changed {
        from: RefreshInterval,
        to: RefreshInterval,
    },
    /// The requested interval was already selected.
    Unchanged,
    /// The controller is read-only; the selection was kept.
    Readonly,
    /// The text named no interval; the selection was kept.
    Unknown,
}

impl SelectOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, SelectOutcome::Changed { .. })
    }
}
