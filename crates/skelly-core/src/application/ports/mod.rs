//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the build needs from the outside world.
//! Adapters in `skelly-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file writes
//!   - `Installer`: Package-manager subprocesses
//!   - `TemplateRenderer`: Template rendering
//!
//! - **Driving (Input) Ports**: `ProjectBuilder` itself, called by the CLI

pub mod output;

pub use output::{Filesystem, InstallCommand, Installer, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockInstaller, MockTemplateRenderer};
