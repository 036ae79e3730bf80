//! # Configuration System
//!
//! Hierarchical TOML configuration for dashtick.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - refresh off, read-only
//! 2. **User config** - `~/.dashtick/config.toml` (global user preferences)
//! 3. **Project config** - `./.dashtick/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.dashtick/config.toml
//! [refresh]
//! interval = "ONE_MIN"
//! readonly = false
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use dashtick_core::config::DashtickConfig;
//!
//! fn example() -> Result<(), dashtick_core::ConfigError> {
//!     let config = DashtickConfig::load_hierarchy()?;
//!     let controller = config.build_controller();
//!     println!("{}", controller.selected());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{DashtickConfig, RefreshConfig};
pub use validation::validate_config;

use crate::controller::RefreshController;
use crate::interval::RefreshInterval;

impl DashtickConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Configured interval, `Off` when unset or unknown.
    pub fn interval(&self) -> RefreshInterval {
        self.refresh
            .interval
            .as_deref()
            .and_then(RefreshInterval::from_key)
            .unwrap_or_default()
    }

    /// Configured access mode, read-only when unset.
    pub fn readonly(&self) -> bool {
        self.refresh.readonly.unwrap_or(defaults::DEFAULT_READONLY)
    }

    /// Create an unmounted controller from this configuration.
    ///
    /// An unknown interval name is clamped to `Off` by the controller.
    pub fn build_controller(&self) -> RefreshController {
        match &self.refresh.interval {
            Some(key) => RefreshController::initialize_from_key(key, self.readonly()),
            None => RefreshController::initialize(RefreshInterval::default(), self.readonly()),
        }
    }
}
