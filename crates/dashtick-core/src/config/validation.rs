use crate::config::types::DashtickConfig;
use crate::errors::ConfigError;
use crate::interval::RefreshInterval;

/// Check that the configured interval, if any, names a known interval.
pub fn validate_config(config: &DashtickConfig) -> Result<(), ConfigError> {
    if let Some(value) = &config.refresh.interval
        && RefreshInterval::from_key(value).is_none()
    {
        return Err(ConfigError::InvalidInterval {
            value: value.clone(),
        });
    }

    Ok(())
}
