use std::time::Duration;

use tracing::{debug, info, warn};

use super::subscribers::{SubscriberList, SubscriptionId};
use super::types::{ControllerState, SelectOutcome};
use crate::interval::RefreshInterval;

/// Owns the refresh interval selection of one dashboard.
///
/// # Semantics
///
/// - **Mount**: [`mount`](Self::mount) delivers exactly one notification with
///   the current selection, `Off` included, so a host can start its timer
///   without a separate bootstrap call. Later calls do nothing.
/// - **Selection**: [`select`](Self::select) notifies only on an actual
///   change. Re-selecting the current value, selecting while read-only and
///   selecting unknown text are silent no-ops.
/// - **Before mount**: selections update the state without notifying. The
///   mount notification reports whatever is selected at that point.
/// - **Delivery**: synchronous, in subscription order, before the call
///   returns.
#[derive(Debug, Default)]
pub struct RefreshController {
    state: ControllerState,
    mounted: bool,
    subscribers: SubscriberList,
}

impl RefreshController {
    /// Create an unmounted controller with an explicit selection and access mode.
    pub fn initialize(initial: RefreshInterval, readonly: bool) -> Self {
        debug!(
            event = "core.controller.initialized",
            selected = %initial,
            readonly = readonly
        );

        Self {
            state: ControllerState {
                selected: initial,
                readonly,
            },
            mounted: false,
            subscribers: SubscriberList::new(),
        }
    }

    /// Like [`initialize`](Self::initialize), from host-supplied text.
    ///
    /// Text that names no interval falls back to `Off`.
    pub fn initialize_from_key(initial: &str, readonly: bool) -> Self {
        let selected = match RefreshInterval::from_key(initial) {
            Some(interval) => interval,
            None => {
                warn!(
                    event = "core.controller.initial_value_clamped",
                    value = initial,
                    fallback = %RefreshInterval::Off
                );
                RefreshInterval::Off
            }
        };
        Self::initialize(selected, readonly)
    }

    /// Initialize, subscribe `on_change` and mount in one step.
    ///
    /// `on_change` has received the initial notification by the time this
    /// returns.
    pub fn initialize_mounted<F>(
        initial: RefreshInterval,
        readonly: bool,
        on_change: F,
    ) -> (Self, SubscriptionId)
    where
        F: FnMut(RefreshInterval) + 'static,
    {
        let mut controller = Self::initialize(initial, readonly);
        let id = controller.subscribe(on_change);
        controller.mount();
        (controller, id)
    }

    /// Register a callback for selection changes.
    ///
    /// Subscribing after mount does not replay the mount notification.
    pub fn subscribe<F>(&mut self, on_change: F) -> SubscriptionId
    where
        F: FnMut(RefreshInterval) + 'static,
    {
        self.subscribers.add(Box::new(on_change))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Activate the controller, notifying subscribers of the current selection.
    ///
    /// Returns `false` without notifying if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            debug!(event = "core.controller.mount_skipped", reason = "already_mounted");
            return false;
        }

        self.mounted = true;
        info!(
            event = "core.controller.mounted",
            selected = %self.state.selected,
            readonly = self.state.readonly
        );
        self.notify();
        true
    }

    /// Change the selected interval.
    pub fn select(&mut self, interval: RefreshInterval) -> SelectOutcome {
        if self.state.readonly {
            debug!(
                event = "core.controller.select_ignored",
                reason = "readonly",
                requested = %interval
            );
            return SelectOutcome::Readonly;
        }

        let previous = self.state.selected;
        if previous == interval {
            debug!(
                event = "core.controller.select_ignored",
                reason = "unchanged",
                requested = %interval
            );
            return SelectOutcome::Unchanged;
        }

        self.state.selected = interval;
        info!(
            event = "core.controller.selection_changed",
            from = %previous,
            to = %interval,
            mounted = self.mounted
        );

        if self.mounted {
            self.notify();
        }

        SelectOutcome::Changed {
            from: previous,
            to: interval,
        }
    }

    /// Change the selected interval from host-supplied text.
    ///
    /// Text that names no interval leaves the selection as it is.
    pub fn select_key(&mut self, key: &str) -> SelectOutcome {
        match RefreshInterval::from_key(key) {
            Some(interval) => self.select(interval),
            None => {
                warn!(
                    event = "core.controller.select_ignored",
                    reason = "unknown_interval",
                    requested = key
                );
                SelectOutcome::Unknown
            }
        }
    }

    /// Host-driven access mode change. Never notifies.
    pub fn set_readonly(&mut self, readonly: bool) {
        if self.state.readonly != readonly {
            debug!(event = "core.controller.readonly_changed", readonly = readonly);
        }
        self.state.readonly = readonly;
    }

    /// The intervals a picker offers, in display order.
    ///
    /// Not filtered by `readonly`: a read-only host shows the current value
    /// as display-only instead of hiding options.
    pub fn available_options(&self) -> &'static [RefreshInterval] {
        &RefreshInterval::ALL
    }

    /// Wait between refreshes for the current selection, `None` when off.
    pub fn current_duration(&self) -> Option<Duration> {
        self.state.selected.duration()
    }

    pub fn current_millis(&self) -> Option<u64> {
        self.state.selected.millis()
    }

    pub fn selected(&self) -> RefreshInterval {
        self.state.selected
    }

    pub fn is_readonly(&self) -> bool {
        self.state.readonly
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        debug!(
            event = "core.controller.notify_started",
            selected = %self.state.selected,
            subscriber_count = self.subscribers.len()
        );
        self.subscribers.notify(self.state.selected);
    }
}
