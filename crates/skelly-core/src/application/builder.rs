//! ProjectBuilder - the build orchestrator.
//!
//! Collects configuration incrementally, validates the two fatal
//! preconditions and drives the build:
//!
//! 1. Create the project root at `output_path/name`
//! 2. Materialize architecture ++ backend ++ frontend folders
//! 3. Backend config files, then backend dependency install
//! 4. Frontend config files, then frontend dependency install
//!
//! Only a missing name or a missing architecture strategy is returned as
//! `Err`. Everything that fails after validation is recorded in the
//! [`BuildReport`] and the remaining stages still run.

use chrono::Utc;
use std::path::{Component, Path, PathBuf};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ConfigurationError, TemplateService,
        materialize::materialize_folders,
        ports::{Filesystem, Installer, TemplateRenderer},
        report::{BuildIssue, BuildOutcome, BuildReport, BuildStage},
    },
    domain::{ProjectConfig, RelativePath},
    error::SkellyResult,
    strategies::{ArchitectureStrategy, BackendStrategy, FrontendStrategy},
};

/// Where a builder is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    MetaSet,
    Configured,
    Built,
}

/// Preview or real build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Compute folders and libraries only. No port is called.
    DryRun,
    Execute,
}

/// Builds one project.
///
/// Owns the mutable builder state; [`build`](Self::build) snapshots it into
/// an immutable [`ProjectConfig`] so strategies never see a half-updated
/// configuration.
pub struct ProjectBuilder {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    installer: Box<dyn Installer>,

    state: BuilderState,
    name: Option<String>,
    frontend_stack: String,
    backend_stack: String,
    architecture_label: Option<String>,
    frontend_libraries: Vec<String>,
    backend_libraries: Vec<String>,
    output_path: PathBuf,

    architecture: Option<Box<dyn ArchitectureStrategy>>,
    backend: Option<Box<dyn BackendStrategy>>,
    frontend: Option<Box<dyn FrontendStrategy>>,
}

impl ProjectBuilder {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            installer,
            state: BuilderState::Empty,
            name: None,
            frontend_stack: String::new(),
            backend_stack: String::new(),
            architecture_label: None,
            frontend_libraries: Vec::new(),
            backend_libraries: Vec::new(),
            output_path: PathBuf::from("."),
            architecture: None,
            backend: None,
            frontend: None,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Set (or reset) the project name.
    pub fn set_meta_data(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self.state = BuilderState::MetaSet;
        self
    }

    pub fn set_frontend_stack(&mut self, stack: impl Into<String>) -> &mut Self {
        self.frontend_stack = stack.into();
        self.configured()
    }

    pub fn set_backend_stack(&mut self, stack: impl Into<String>) -> &mut Self {
        self.backend_stack = stack.into();
        self.configured()
    }

    /// Display label stored in the config. Defaults to the attached
    /// architecture strategy's name.
    pub fn set_architecture_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.architecture_label = Some(label.into());
        self.configured()
    }

    pub fn add_frontend_libraries<I, S>(&mut self, libraries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frontend_libraries
            .extend(libraries.into_iter().map(Into::into));
        self.configured()
    }

    pub fn add_backend_libraries<I, S>(&mut self, libraries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backend_libraries
            .extend(libraries.into_iter().map(Into::into));
        self.configured()
    }

    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.output_path = path.into();
        self.configured()
    }

    pub fn attach_architecture_strategy(
        &mut self,
        strategy: Box<dyn ArchitectureStrategy>,
    ) -> &mut Self {
        self.architecture = Some(strategy);
        self
    }

    pub fn attach_backend_strategy(&mut self, strategy: Box<dyn BackendStrategy>) -> &mut Self {
        self.backend = Some(strategy);
        self
    }

    pub fn attach_frontend_strategy(
        &mut self,
        strategy: Option<Box<dyn FrontendStrategy>>,
    ) -> &mut Self {
        self.frontend = strategy;
        self
    }

    fn configured(&mut self) -> &mut Self {
        if self.state == BuilderState::MetaSet {
            self.state = BuilderState::Configured;
        }
        self
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::NameNotSet`, `ConfigurationError::InvalidName` or
    /// `ConfigurationError::ArchitectureRequired`, before any port is called.
    /// Every other failure is reported in `BuildReport::issues`.
    #[instrument(skip_all, fields(mode = ?mode))]
    pub fn build(&mut self, mode: BuildMode) -> SkellyResult<BuildReport> {
        let config = self.snapshot()?;
        let Some(architecture) = self.architecture.as_deref() else {
            return Err(ConfigurationError::ArchitectureRequired.into());
        };

        let folders = self.collect_folders(architecture);
        let project_root = config.project_root();
        let mut report = BuildReport {
            build_id: Uuid::new_v4(),
            started_at: Utc::now(),
            project_root: project_root.clone(),
            outcome: BuildOutcome::Preview { folders: Vec::new() },
            issues: Vec::new(),
            config,
        };

        match mode {
            BuildMode::DryRun => {
                info!(
                    project = report.config.name(),
                    folders = folders.len(),
                    "Dry run, nothing written"
                );
                report.outcome = BuildOutcome::Preview { folders };
            }
            BuildMode::Execute => {
                let folders_created =
                    self.execute(&report.config, &project_root, &folders, &mut report.issues);
                report.outcome = BuildOutcome::Materialized { folders_created };
            }
        }

        self.state = BuilderState::Built;
        Ok(report)
    }

    /// Validate and freeze the builder state.
    fn snapshot(&self) -> Result<ProjectConfig, ConfigurationError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ConfigurationError::NameNotSet)?;
        check_root_name(name)?;
        let architecture = self
            .architecture
            .as_deref()
            .ok_or(ConfigurationError::ArchitectureRequired)?;

        let label = self
            .architecture_label
            .clone()
            .unwrap_or_else(|| architecture.name().to_string());

        Ok(ProjectConfig::new(name)
            .with_frontend_stack(self.frontend_stack.as_str())
            .with_backend_stack(self.backend_stack.as_str())
            .with_architecture(label)
            .with_frontend_libraries(self.frontend_libraries.iter().cloned())
            .with_backend_libraries(self.backend_libraries.iter().cloned())
            .with_output_path(self.output_path.clone()))
    }

    /// Architecture ++ backend ++ frontend, no deduplication.
    fn collect_folders(&self, architecture: &dyn ArchitectureStrategy) -> Vec<RelativePath> {
        let mut folders = architecture.folders();
        if let Some(backend) = &self.backend {
            folders.extend(backend.folders());
        }
        if let Some(frontend) = &self.frontend {
            folders.extend(frontend.folders());
        }
        folders
    }

    fn execute(
        &self,
        config: &ProjectConfig,
        root: &Path,
        folders: &[RelativePath],
        issues: &mut Vec<BuildIssue>,
    ) -> usize {
        if !self.create_root(root, issues) {
            return 0;
        }

        let created = materialize_folders(self.filesystem.as_ref(), root, folders, issues);
        info!(created, requested = folders.len(), "Folders materialized");

        let templates = TemplateService::new(self.renderer.as_ref(), self.filesystem.as_ref());

        if let Some(backend) = &self.backend {
            record_stage(
                BuildStage::BackendConfig,
                backend.create_config_files(config, root, &templates),
                issues,
            );
            record_stage(
                BuildStage::BackendInstall,
                backend.install_dependencies(root, self.installer.as_ref()),
                issues,
            );
        }

        if let Some(frontend) = &self.frontend {
            record_stage(
                BuildStage::FrontendConfig,
                frontend.create_config_files(config, root, &templates),
                issues,
            );
            record_stage(
                BuildStage::FrontendInstall,
                frontend.install_dependencies(root, self.installer.as_ref()),
                issues,
            );
        }

        created
    }

    /// `false` when nothing downstream can run.
    #[instrument(skip_all, fields(root = %root.display()))]
    fn create_root(&self, root: &Path, issues: &mut Vec<BuildIssue>) -> bool {
        if self.filesystem.is_dir(root) {
            warn!("Project root already exists, scaffolding into it");
        }

        match self.filesystem.create_dir_all(root) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "Could not create project root, skipping remaining stages");
                issues.push(BuildIssue {
                    stage: BuildStage::RootDirectory,
                    error,
                });
                false
            }
        }
    }
}

/// The root is `output_path/name`, so the name must be exactly one plain
/// path component.
fn check_root_name(name: &str) -> Result<(), ConfigurationError> {
    if name.contains(['/', '\\']) {
        return Err(ConfigurationError::InvalidName {
            reason: "name cannot contain path separators",
        });
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConfigurationError::InvalidName {
            reason: "name must be a single folder, not '.', '..' or a rooted path",
        }),
    }
}

fn record_stage(stage: BuildStage, result: SkellyResult<()>, issues: &mut Vec<BuildIssue>) {
    match result {
        Ok(()) => info!(%stage, "Stage complete"),
        Err(error) => {
            warn!(%stage, %error, "Stage failed, continuing");
            issues.push(BuildIssue { stage, error });
        }
    }
}
