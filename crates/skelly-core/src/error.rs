//! Unified error handling for Skelly Core.
//!
//! This module provides a unified error type that wraps configuration, domain
//! and application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, ConfigurationError};
use crate::domain::DomainError;

/// Root error type for Skelly Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkellyError {
    /// Fatal precondition failures raised by `ProjectBuilder::build`.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Errors from the domain layer (invalid paths, unknown catalog keys).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from build stages (installers, templates, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SkellyError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Configuration(e) => e.suggestions(),
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Skelly".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Filesystem,
    External,
    Internal,
}

/// Convenient result type alias.
pub type SkellyResult<T> = Result<T, SkellyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn configuration_errors_have_their_own_category() {
        let err: SkellyError = ConfigurationError::NameNotSet.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn install_errors_are_external() {
        let err: SkellyError = ApplicationError::DependencyInstall {
            program: "mvn".into(),
            working_dir: PathBuf::from("server"),
            reason: "not found".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::External);
        assert!(err.suggestions().iter().any(|s| s.contains("mvn")));
    }

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SkellyError::from(ConfigurationError::NameNotSet).to_string(),
            "Configuration error: Project name is not set"
        );
        assert_eq!(
            SkellyError::from(ConfigurationError::ArchitectureRequired).to_string(),
            "Configuration error: Architecture strategy is required"
        );
    }

    #[test]
    fn domain_category_maps_through() {
        let err: SkellyError = DomainError::UnknownArchitecture("onion".into()).into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
