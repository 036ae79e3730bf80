//! Refresh intervals selectable for a dashboard.
//!
//! The set is closed and ordered. Text coming from outside (config files,
//! CLI arguments) goes through [`duration_for_key`] or
//! [`RefreshInterval::from_key`], which never guess: unknown text means no
//! periodic refresh.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::IntervalError;
pub use operations::{duration_for_key, millis_for_key};
pub use types::RefreshInterval;
