//! Strategy capability sets and their concrete implementations.
//!
//! A build combines one [`ArchitectureStrategy`] (required) with an optional
//! [`BackendStrategy`] and an optional [`FrontendStrategy`]. Architectures only
//! decide folders; backends and frontends also emit config files and run
//! their package manager.
//!
//! Strategies are constructed once with their parameters and are stateless
//! afterwards. They never touch the disk directly: files go through the
//! [`TemplateService`] and subprocesses through the [`Installer`] port.
//!
//! Concrete variants are selected by [`StrategyFactory`].

use std::path::Path;

use crate::application::TemplateService;
use crate::application::ports::{InstallCommand, Installer};
use crate::domain::{ProjectConfig, RelativePath};
use crate::error::SkellyResult;

pub mod architecture;
pub mod backend;
pub mod factory;
pub mod frontend;

pub use architecture::{CustomArchitecture, HexagonalArchitecture, LayeredArchitecture};
pub use backend::{DjangoBackend, ExpressBackend, JavaSpringBackend};
pub use factory::StrategyFactory;
pub use frontend::{AngularFrontend, LitFrontend, ReactFrontend};

/// Decides the backend-side directory skeleton.
///
/// Must be deterministic: the same constructor arguments always give the same
/// folder list.
pub trait ArchitectureStrategy: Send + Sync {
    fn folders(&self) -> Vec<RelativePath>;

    /// Display name, stored in `ProjectConfig::architecture`.
    fn name(&self) -> &str;
}

/// Server-side stack: folders, manifests, dependency install under `server/`.
pub trait BackendStrategy: Send + Sync {
    fn folders(&self) -> Vec<RelativePath>;

    fn name(&self) -> &str;

    /// Write manifests (and example sources, when the architecture is one
    /// this backend recognises) below `base_path`.
    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()>;

    /// Run the stack's package manager once against the generated manifest.
    fn install_dependencies(&self, base_path: &Path, installer: &dyn Installer)
    -> SkellyResult<()>;
}

/// Client-side stack living under `frontend/`.
pub trait FrontendStrategy: Send + Sync {
    fn folders(&self) -> Vec<RelativePath>;

    fn name(&self) -> &str;

    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()>;

    /// `npm install` in `<base>/frontend`.
    fn install_dependencies(
        &self,
        base_path: &Path,
        installer: &dyn Installer,
    ) -> SkellyResult<()> {
        installer.run(&InstallCommand::new(
            "npm",
            ["install"],
            base_path.join(FRONTEND_DIR),
        ))
    }
}

pub(crate) const SERVER_DIR: &str = "server";
pub(crate) const FRONTEND_DIR: &str = "frontend";

/// Split library entries into individual packages.
///
/// One catalog entry may name several packages (`tailwindcss postcss
/// autoprefixer`); order is kept and duplicates are not removed.
pub(crate) fn split_packages(entries: &[String]) -> impl Iterator<Item = &str> {
    entries.iter().flat_map(|entry| entry.split_whitespace())
}

/// Pretty-printed JSON with a trailing newline, keys in insertion order.
pub(crate) fn to_manifest(value: &serde_json::Value) -> SkellyResult<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| {
        crate::error::SkellyError::Internal {
            message: format!("manifest serialization failed: {e}"),
        }
    })?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockInstaller;
    use mockall::predicate::*;
    use std::path::PathBuf;

    struct Bare;

    impl FrontendStrategy for Bare {
        fn folders(&self) -> Vec<RelativePath> {
            vec![]
        }
        fn name(&self) -> &str {
            "bare"
        }
        fn create_config_files(
            &self,
            _: &ProjectConfig,
            _: &Path,
            _: &TemplateService<'_>,
        ) -> SkellyResult<()> {
            Ok(())
        }
    }

    #[test]
    fn default_frontend_install_runs_npm_in_frontend_dir() {
        let mut installer = MockInstaller::new();
        installer
            .expect_run()
            .with(eq(InstallCommand::new(
                "npm",
                ["install"],
                PathBuf::from("/tmp/app/frontend"),
            )))
            .times(1)
            .returning(|_| Ok(()));

        Bare.install_dependencies(Path::new("/tmp/app"), &installer)
            .unwrap();
    }

    #[test]
    fn split_packages_keeps_order_and_duplicates() {
        let entries = vec![
            "@reduxjs/toolkit react-redux".to_string(),
            "react-router-dom".to_string(),
            "react-redux".to_string(),
        ];
        let packages: Vec<_> = split_packages(&entries).collect();
        assert_eq!(
            packages,
            ["@reduxjs/toolkit", "react-redux", "react-router-dom", "react-redux"]
        );
    }
}
