use crate::errors::DashtickError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error(
        "Unknown refresh interval '{value}'. Valid: OFF, TEN_SECONDS, ONE_MIN, FIVE_MIN, QUARTER, ONE_HOUR"
    )]
    Unknown { value: String },
}

impl DashtickError for IntervalError {
    fn error_code(&self) -> &'static str {
        match self {
            IntervalError::Unknown { .. } => "UNKNOWN_INTERVAL",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
