//! Infrastructure adapters for Skelly.
//!
//! This crate implements the ports defined in `skelly_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod installer;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{NoopInstaller, ProcessInstaller, RecordingInstaller};
pub use renderer::TeraRenderer;
pub use template_loader::FilesystemTemplateLoader;
