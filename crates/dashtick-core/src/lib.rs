//! dashtick-core: Refresh interval controller for periodically refreshed dashboards
//!
//! This library holds the user-selectable refresh interval of a dashboard,
//! maps it to a concrete wait duration, and notifies subscribers whenever the
//! selection changes. Timer ownership stays with the host (see the `dashtick`
//! CLI for one).
//!
//! # Main Entry Points
//!
//! - [`interval`] - The closed set of refresh intervals and their durations
//! - [`controller`] - Selection state and change notifications
//! - [`config`] - Configuration management

pub mod config;
pub mod controller;
pub mod errors;
pub mod events;
pub mod interval;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::DashtickConfig;
pub use controller::{ControllerState, RefreshController, SelectOutcome, SubscriptionId};
pub use errors::{ConfigError, DashtickError};
pub use interval::{IntervalError, RefreshInterval, duration_for_key, millis_for_key};

// Re-export logging initialization
pub use logging::init_logging;
