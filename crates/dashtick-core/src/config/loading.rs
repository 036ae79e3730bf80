//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.dashtick/config.toml` (global user preferences)
//! 3. **Project config** - `./.dashtick/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::defaults::{project_config_path, user_config_path};
use crate::config::types::{DashtickConfig, RefreshConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Uses the home directory for the user config and the current directory
/// for the project config.
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<DashtickConfig, ConfigError> {
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(user_config_path().as_deref(), &project_dir)
}

/// Load and merge defaults, `user_config` (if given) and the project config
/// under `project_dir`, then validate the result.
pub fn load_hierarchy_from(
    user_config: Option<&Path>,
    project_dir: &Path,
) -> Result<DashtickConfig, ConfigError> {
    let mut config = DashtickConfig::default();

    if let Some(path) = user_config
        && let Some(user) = load_optional_config_file(path)?
    {
        config = merge_configs(config, user);
    }

    let project_path = project_config_path(project_dir);
    if let Some(project) = load_optional_config_file(&project_path)? {
        config = merge_configs(config, project);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, `Ok(None)` if it does not exist.
fn load_optional_config_file(path: &Path) -> Result<Option<DashtickConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            Ok(None)
        }
        Err(e) => {
            warn!(
                event = "core.config.load_failed",
                path = %path.display(),
                error = %e
            );
            Err(e)
        }
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<DashtickConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DashtickConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display()
    );
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field is overridden only when the override sets it.
pub fn merge_configs(base: DashtickConfig, override_config: DashtickConfig) -> DashtickConfig {
    DashtickConfig {
        refresh: RefreshConfig {
            interval: override_config.refresh.interval.or(base.refresh.interval),
            readonly: override_config.refresh.readonly.or(base.refresh.readonly),
        },
    }
}
