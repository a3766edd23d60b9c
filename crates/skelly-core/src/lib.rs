//! Skelly Core - strategy composition and build orchestration
//!
//! This crate provides the domain and application layers for the Skelly
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           skelly-cli (CLI)              │
//! │   parses choices, picks strategies      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ProjectBuilder + Strategies          │
//! │  (architecture / backend / frontend)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, Installer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     skelly-adapters (Infrastructure)    │
//! │ (LocalFilesystem, TeraRenderer, ...)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skelly_core::prelude::*;
//!
//! let mut builder = ProjectBuilder::new(filesystem, renderer, installer);
//! builder
//!     .set_meta_data("my-shop")
//!     .set_backend_stack(BackendStack::Express.label())
//!     .attach_architecture_strategy(StrategyFactory::create_architecture(
//!         ArchitectureKind::Layered, "my-shop", Some(BackendStack::Express), None,
//!     )?)
//!     .attach_backend_strategy(StrategyFactory::create_backend(BackendStack::Express, "my-shop")?);
//!
//! let report = builder.build(BuildMode::Execute)?;
//! for issue in &report.issues {
//!     eprintln!("{}: {}", issue.stage, issue.error);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod strategies;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildIssue, BuildMode, BuildOutcome, BuildReport, BuildStage, ProjectBuilder,
        TemplateService,
        ports::{Filesystem, InstallCommand, Installer, TemplateRenderer},
    };
    pub use crate::domain::{
        ArchitectureKind, BackendStack, FrontendStack, LibraryChoice, ProjectConfig,
        RelativePath, RenderContext,
    };
    pub use crate::error::{SkellyError, SkellyResult};
    pub use crate::strategies::{
        ArchitectureStrategy, BackendStrategy, FrontendStrategy, StrategyFactory,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
