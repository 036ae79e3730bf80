//! Periodic refresh timer owned by the watch host.
//!
//! The controller only announces interval changes. This timer turns each
//! announcement into "cancel the current periodic refresh, then schedule a
//! new one if the interval has a duration", so at most one tick task runs
//! at a time.

use std::time::Duration;

use dashtick_core::RefreshInterval;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// One periodic refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub interval: RefreshInterval,
    /// Arming that produced this tick. Ticks from a cancelled arming may
    /// still sit in the channel; compare with [`RefreshTimer::generation`].
    pub generation: u64,
}

#[derive(Debug)]
pub struct RefreshTimer {
    ticks: UnboundedSender<Tick>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl RefreshTimer {
    pub fn new(ticks: UnboundedSender<Tick>) -> Self {
        Self {
            ticks,
            task: None,
            generation: 0,
        }
    }

    /// Replace the running schedule with one for `interval`.
    ///
    /// Must be called from within a tokio runtime. The first tick fires one
    /// full period after arming.
    pub fn rearm(&mut self, interval: RefreshInterval) {
        self.cancel();
        self.generation += 1;

        let Some(period) = interval.duration() else {
            debug!(
                event = "cli.timer.disarmed",
                interval = %interval,
                generation = self.generation
            );
            return;
        };

        debug!(
            event = "cli.timer.armed",
            interval = %interval,
            period_ms = period_millis(period),
            generation = self.generation
        );

        let ticks = self.ticks.clone();
        let generation = self.generation;
        self.task = Some(tokio::spawn(async move {
            let mut schedule = tokio::time::interval_at(Instant::now() + period, period);
            schedule.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                schedule.tick().await;
                if ticks
                    .send(Tick {
                        interval,
                        generation,
                    })
                    .is_err()
                {
                    break;
                }
            }
        }));
    }

    /// Stop the running schedule. Returns `false` if none was running.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                debug!(event = "cli.timer.cancelled", generation = self.generation);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whole milliseconds in `period`, saturating at `u64::MAX`.
fn period_millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
