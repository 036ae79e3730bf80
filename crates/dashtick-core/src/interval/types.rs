use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::IntervalError;

/// Prefix of the localization key a host uses to label an interval.
const LABEL_KEY_PREFIX: &str = "dashboard.interval.";

/// How often a dashboard refreshes its data.
///
/// Declaration order is the display order. The discriminant carries no
/// meaning beyond that; use [`RefreshInterval::duration`] for the cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefreshInterval {
    /// No periodic refresh.
    #[default]
    Off,
    TenSeconds,
    OneMin,
    FiveMin,
    /// Fifteen minutes.
    Quarter,
    OneHour,
}

impl RefreshInterval {
    /// All intervals in display order.
    pub const ALL: [RefreshInterval; 6] = [
        RefreshInterval::Off,
        RefreshInterval::TenSeconds,
        RefreshInterval::OneMin,
        RefreshInterval::FiveMin,
        RefreshInterval::Quarter,
        RefreshInterval::OneHour,
    ];

    /// Canonical identifier, as used in config files and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshInterval::Off => "OFF",
            RefreshInterval::TenSeconds => "TEN_SECONDS",
            RefreshInterval::OneMin => "ONE_MIN",
            RefreshInterval::FiveMin => "FIVE_MIN",
            RefreshInterval::Quarter => "QUARTER",
            RefreshInterval::OneHour => "ONE_HOUR",
        }
    }

    /// Wait between two refreshes, or `None` when periodic refresh is off.
    pub fn duration(&self) -> Option<Duration> {
        self.millis().map(Duration::from_millis)
    }

    /// Same as [`RefreshInterval::duration`], in milliseconds.
    pub fn millis(&self) -> Option<u64> {
        match self {
            RefreshInterval::Off => None,
            RefreshInterval::TenSeconds => Some(10 * 1000),
            RefreshInterval::OneMin => Some(60 * 1000),
            RefreshInterval::FiveMin => Some(5 * 60 * 1000),
            RefreshInterval::Quarter => Some(15 * 60 * 1000),
            RefreshInterval::OneHour => Some(60 * 60 * 1000),
        }
    }

    /// Whether selecting this interval arms a periodic refresh.
    pub fn is_enabled(&self) -> bool {
        self.millis().is_some()
    }

    /// Localization key for the label of this interval, e.g.
    /// `dashboard.interval.ten_seconds`. Hosts look it up in their own
    /// translation table.
    pub fn label_key(&self) -> String {
        format!("{}{}", LABEL_KEY_PREFIX, self.as_str().to_lowercase())
    }

    /// Parse host-supplied text, `None` when it names no interval.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| IntervalError::Unknown {
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_table() {
        assert_eq!(RefreshInterval::Off.millis(), None);
        assert_eq!(RefreshInterval::TenSeconds.millis(), Some(10_000));
        assert_eq!(RefreshInterval::OneMin.millis(), Some(60_000));
        assert_eq!(RefreshInterval::FiveMin.millis(), Some(300_000));
        assert_eq!(RefreshInterval::Quarter.millis(), Some(900_000));
        assert_eq!(RefreshInterval::OneHour.millis(), Some(3_600_000));
    }

    #[test]
    fn test_duration_matches_millis() {
        for interval in RefreshInterval::ALL {
            assert_eq!(
                interval.duration(),
                interval.millis().map(Duration::from_millis),
                "duration and millis disagree for {}",
                interval
            );
        }
        assert_eq!(
            RefreshInterval::Quarter.duration(),
            Some(Duration::from_secs(15 * 60))
        );
    }

    #[test]
    fn test_only_off_is_disabled() {
        let disabled: Vec<_> = RefreshInterval::ALL
            .into_iter()
            .filter(|i| !i.is_enabled())
            .collect();
        assert_eq!(disabled, vec![RefreshInterval::Off]);
    }

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = RefreshInterval::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            names,
            vec!["OFF", "TEN_SECONDS", "ONE_MIN", "FIVE_MIN", "QUARTER", "ONE_HOUR"]
        );
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(RefreshInterval::default(), RefreshInterval::Off);
    }

    #[test]
    fn test_label_key_is_lowercased_identifier() {
        assert_eq!(RefreshInterval::Off.label_key(), "dashboard.interval.off");
        assert_eq!(
            RefreshInterval::TenSeconds.label_key(),
            "dashboard.interval.ten_seconds"
        );
        assert_eq!(
            RefreshInterval::OneHour.label_key(),
            "dashboard.interval.one_hour"
        );
    }

    #[test]
    fn test_from_key_ignores_case_and_whitespace() {
        assert_eq!(RefreshInterval::from_key("one_min"), Some(RefreshInterval::OneMin));
        assert_eq!(
            RefreshInterval::from_key("  Quarter\n"),
            Some(RefreshInterval::Quarter)
        );
        assert_eq!(RefreshInterval::from_key("ONE_MINUTE"), None);
        assert_eq!(RefreshInterval::from_key(""), None);
    }

    #[test]
    fn test_from_str_unknown_is_error() {
        let err = "hourly".parse::<RefreshInterval>().unwrap_err();
        assert_eq!(
            err,
            IntervalError::Unknown {
                value: "hourly".to_string()
            }
        );
        assert_eq!("FIVE_MIN".parse::<RefreshInterval>(), Ok(RefreshInterval::FiveMin));
    }

    #[test]
    fn test_serde_uses_canonical_identifiers() {
        let json = serde_json::to_string(&RefreshInterval::TenSeconds).unwrap();
        assert_eq!(json, "\"TEN_SECONDS\"");

        let parsed: RefreshInterval = serde_json::from_str("\"ONE_HOUR\"").unwrap();
        assert_eq!(parsed, RefreshInterval::OneHour);

        assert!(serde_json::from_str::<RefreshInterval>("\"one_hour\"").is_err());
    }
}
