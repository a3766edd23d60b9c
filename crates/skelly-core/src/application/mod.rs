//! Application layer for Skelly.
//!
//! This layer contains:
//! - **Builder**: `ProjectBuilder`, the build orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Services**: `TemplateService`, rendering composed with file writes
//! - **Report**: What a build returns
//! - **Errors**: Application-specific error types

pub mod builder;
pub mod error;
mod materialize;
pub mod ports;
pub mod report;
pub mod services;

pub use builder::{BuildMode, BuilderState, ProjectBuilder};
pub use error::{ApplicationError, ConfigurationError};
pub use materialize::KEEP_FILE;
pub use ports::{Filesystem, InstallCommand, Installer, TemplateRenderer};
pub use report::{BuildIssue, BuildOutcome, BuildReport, BuildStage};
pub use services::TemplateService;
