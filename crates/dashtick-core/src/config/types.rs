//! Configuration type definitions for dashtick.
//!
//! # Example Configuration
//!
//! ```toml
//! [refresh]
//! interval = "QUARTER"
//! readonly = true
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.dashtick/config.toml`
/// 2. Project config: `./.dashtick/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashtickConfig {
    /// Refresh interval settings
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// `[refresh]` section.
///
/// Fields are optional so that a project config can override a single
/// value from the user config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RefreshConfig {
    /// Initial interval, one of OFF, TEN_SECONDS, ONE_MIN, FIVE_MIN,
    /// QUARTER, ONE_HOUR (any case). Default: OFF.
    ///
    /// Kept as text so an unknown name surfaces through validation instead
    /// of failing the whole parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Whether the interval is display-only. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
}
