//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the build needs from external systems.
//! The `skelly-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::SkellyResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skelly_adapters::filesystem::LocalFilesystem` (production)
/// - `skelly_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Both mutating operations are idempotent on directories: creating a
/// directory that already exists is not an error.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SkellyResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SkellyResult<()>;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// One package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl InstallCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I, working_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// The command line as a user would type it.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port for running a package manager.
///
/// Implemented by:
/// - `skelly_adapters::installer::ProcessInstaller` (blocking subprocess)
/// - `skelly_adapters::installer::RecordingInstaller` (testing)
/// - `skelly_adapters::installer::NoopInstaller` (`--skip-install`)
///
/// Only the exit status matters; output is not parsed. A failure to start
/// and a non-zero exit both surface as `ApplicationError::DependencyInstall`.
#[cfg_attr(test, mockall::automock)]
pub trait Installer: Send + Sync {
    fn run(&self, command: &InstallCommand) -> SkellyResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `skelly_adapters::renderer::TeraRenderer` (built-in template set)
///
/// Must be pure: the same id and context always render the same text. An
/// unknown id or a missing substitution is `ApplicationError::TemplateRender`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template_id: &str, context: &RenderContext) -> SkellyResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_joins_program_and_args() {
        let cmd = InstallCommand::new("mvn", ["install", "-DskipTests"], "server");
        assert_eq!(cmd.display_line(), "mvn install -DskipTests");
    }
}
