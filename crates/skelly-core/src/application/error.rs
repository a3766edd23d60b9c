//! Application layer errors.
//!
//! [`ConfigurationError`] is the only fatal kind: `ProjectBuilder::build`
//! returns it before touching the filesystem. [`ApplicationError`] covers the
//! environmental failures (installers, templates, disk) that a build records
//! in its report and then moves past.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Caller errors detected by `ProjectBuilder::build` preconditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Project name is not set")]
    NameNotSet,

    #[error("Architecture strategy is required")]
    ArchitectureRequired,

    /// The name would put the project root outside the output path.
    #[error("Invalid project name: {reason}")]
    InvalidName { reason: &'static str },
}

impl ConfigurationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NameNotSet => vec![
                "Call set_meta_data(name) with a non-blank project name".into(),
            ],
            Self::ArchitectureRequired => vec![
                "Attach an architecture strategy before building".into(),
                "Available: hexagonal, layered, custom".into(),
            ],
            Self::InvalidName { .. } => vec![
                "Use a single folder name such as my-project or \"My Shop\"".into(),
                "Choose the parent directory with set_output_path".into(),
            ],
        }
    }
}

/// Errors that occur while executing a build stage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Package manager failed to start or exited non-zero.
    #[error("Dependency installation failed: `{program}` in {}: {reason}", working_dir.display())]
    DependencyInstall {
        program: String,
        working_dir: PathBuf,
        reason: String,
    },

    /// Unknown template or a missing substitution.
    #[error("Template rendering failed for '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// A shared adapter lock was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DependencyInstall {
                program,
                working_dir,
                ..
            } => vec![
                format!("Is '{}' installed and in your PATH?", program),
                format!(
                    "Run the install yourself once it is: cd {} && {} ...",
                    working_dir.display(),
                    program
                ),
                "Or re-run with --skip-install".into(),
            ],
            Self::TemplateRender { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "This is likely a bug in the built-in templates, please report it".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DependencyInstall { .. } => ErrorCategory::External,
            Self::TemplateRender { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
        }
    }
}
