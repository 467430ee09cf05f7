//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested page, exercise, or question does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Inputs are well formed but a calculation precondition is unmet.
    #[error("Not computed: {0}")]
    NotComputed(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::Validation(_) => 2,
            Self::NotComputed(_) => 0,
            Self::Config(_) => 78,
            Self::Internal(_) => 1,
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotComputed(_) => "NOT_COMPUTED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::NotFound(String::new()).exit_code(), 2);
        assert_eq!(AppError::Validation(String::new()).exit_code(), 2);
        assert_eq!(AppError::NotComputed(String::new()).exit_code(), 0);
        assert_eq!(AppError::Config(String::new()).exit_code(), 78);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::NotComputed(String::new()).error_code(),
            "NOT_COMPUTED"
        );
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("page".into()).to_string(),
            "Not found: page"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::NotComputed("select a lease term".into()).to_string(),
            "Not computed: select a lease term"
        );
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::Message("bad key".into()).into();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("bad key")));
    }
}
