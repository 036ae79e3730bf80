use std::time::Duration;

use super::types::RefreshInterval;

/// Duration for host-supplied interval text.
///
/// `OFF` and anything that is not an interval both yield `None`: an unknown
/// value disables periodic refresh instead of guessing a cadence.
pub fn duration_for_key(key: &str) -> Option<Duration> {
    RefreshInterval::from_key(key).and_then(|interval| interval.duration())
}

/// Same as [`duration_for_key`], in milliseconds.
pub fn millis_for_key(key: &str) -> Option<u64> {
    RefreshInterval::from_key(key).and_then(|interval| interval.millis())
}
