// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Skelly.
//!
//! Pure data and rules with no I/O: the immutable [`ProjectConfig`], the
//! stack/architecture value objects, the static library catalog, the
//! [`RelativePath`] guardrail and the [`RenderContext`] handed to templates.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod catalog;
pub mod common;
pub mod error;
pub mod project_config;
pub mod render_context;
pub mod value_objects;

pub use catalog::LibraryChoice;
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use project_config::ProjectConfig;
pub use render_context::RenderContext;
pub use value_objects::{ArchitectureKind, BackendStack, FrontendStack};
