// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them after the build returns)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Folder path cannot be empty")]
    EmptyPath,

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    #[error("Unknown backend stack: {0}")]
    UnknownBackendStack(String),

    #[error("Unknown frontend stack: {0}")]
    UnknownFrontendStack(String),

    #[error("Unknown architecture choice: {0}")]
    UnknownArchitecture(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Custom architecture requires at least one folder")]
    MissingCustomFolders,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("'{}' must stay inside the project directory", path),
                "Use relative folder paths such as src/controllers".into(),
            ],
            Self::UnknownBackendStack(stack) => vec![
                format!("'{}' is not a supported backend", stack),
                "Supported backends: java, express, django".into(),
            ],
            Self::UnknownFrontendStack(stack) => vec![
                format!("'{}' is not a supported frontend", stack),
                "Supported frontends: react, lit, angular, none".into(),
            ],
            Self::UnknownArchitecture(arch) => vec![
                format!("'{}' is not a supported architecture", arch),
                "Supported architectures: hexagonal, layered, custom".into(),
            ],
            Self::MissingCustomFolders => vec![
                "Pass the folders to create with --folders".into(),
                "Example: --folders src/controllers,src/models,utils".into(),
            ],
            Self::EmptyPath => vec!["Remove empty entries from the folder list".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::EmptyPath
            | Self::MissingCustomFolders => ErrorCategory::Validation,
            Self::UnknownBackendStack(_)
            | Self::UnknownFrontendStack(_)
            | Self::UnknownArchitecture(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
