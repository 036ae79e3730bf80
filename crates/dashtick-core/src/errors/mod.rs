use std::error::Error;

/// Base trait for all application errors
pub trait DashtickError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error(
        "Invalid refresh interval '{value}'. Supported intervals: OFF, TEN_SECONDS, ONE_MIN, FIVE_MIN, QUARTER, ONE_HOUR"
    )]
    InvalidInterval { value: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DashtickError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidInterval { .. } => "INVALID_INTERVAL",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidInterval { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_boxable_as_dashtick_error() {
        let error: Box<dyn DashtickError> = Box::new(ConfigError::InvalidInterval {
            value: "x".to_string(),
        });
        assert_eq!(error.error_code(), "INVALID_INTERVAL");
    }

    #[test]
    fn test_invalid_interval_display() {
        let error = ConfigError::InvalidInterval {
            value: "TWO_MIN".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid refresh interval 'TWO_MIN'. Supported intervals: OFF, TEN_SECONDS, ONE_MIN, FIVE_MIN, QUARTER, ONE_HOUR"
        );
        assert_eq!(error.error_code(), "INVALID_INTERVAL");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            path: "/tmp/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/tmp/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_not_user_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::from(io_err);
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
