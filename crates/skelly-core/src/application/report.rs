//! Build report returned by `ProjectBuilder::build`.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::{ProjectConfig, RelativePath};
use crate::error::SkellyError;

/// The build step a recoverable issue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStage {
    RootDirectory,
    Folders,
    BackendConfig,
    BackendInstall,
    FrontendConfig,
    FrontendInstall,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RootDirectory => "root directory",
            Self::Folders => "folders",
            Self::BackendConfig => "backend config",
            Self::BackendInstall => "backend install",
            Self::FrontendConfig => "frontend config",
            Self::FrontendInstall => "frontend install",
        };
        f.write_str(s)
    }
}

/// A recoverable failure recorded during a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildIssue {
    pub stage: BuildStage,
    #[serde(serialize_with = "error_message")]
    pub error: SkellyError,
}

fn error_message<S: Serializer>(error: &SkellyError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// What the build produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BuildOutcome {
    /// Dry run: the folders a real build would create, in creation order.
    Preview { folders: Vec<RelativePath> },
    /// Real run: how many folders were created (or already existed).
    Materialized { folders_created: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub build_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub config: ProjectConfig,
    pub project_root: PathBuf,
    pub outcome: BuildOutcome,
    pub issues: Vec<BuildIssue>,
}

impl BuildReport {
    pub fn folder_count(&self) -> usize {
        match &self.outcome {
            BuildOutcome::Preview { folders } => folders.len(),
            BuildOutcome::Materialized { folders_created } => *folders_created,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self.outcome, BuildOutcome::Preview { .. })
    }

    /// Issues recorded for one stage.
    pub fn issues_in(&self, stage: BuildStage) -> impl Iterator<Item = &BuildIssue> {
        self.issues.iter().filter(move |i| i.stage == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;

    fn report(outcome: BuildOutcome, issues: Vec<BuildIssue>) -> BuildReport {
        BuildReport {
            build_id: Uuid::new_v4(),
            started_at: Utc::now(),
            config: ProjectConfig::new("demo"),
            project_root: PathBuf::from("./demo"),
            outcome,
            issues,
        }
    }

    #[test]
    fn preview_counts_listed_folders() {
        let folders = vec![
            RelativePath::try_new("server/src").unwrap(),
            RelativePath::try_new("frontend/public").unwrap(),
        ];
        let r = report(BuildOutcome::Preview { folders }, vec![]);
        assert!(r.is_dry_run());
        assert!(r.is_clean());
        assert_eq!(r.folder_count(), 2);
    }

    #[test]
    fn issues_serialize_as_messages() {
        let issue = BuildIssue {
            stage: BuildStage::BackendInstall,
            error: ApplicationError::DependencyInstall {
                program: "pip".into(),
                working_dir: PathBuf::from("demo/server"),
                reason: "not found".into(),
            }
            .into(),
        };
        let r = report(BuildOutcome::Materialized { folders_created: 3 }, vec![issue]);

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["outcome"]["mode"], "materialized");
        assert_eq!(json["issues"][0]["stage"], "backend_install");
        assert!(
            json["issues"][0]["error"]
                .as_str()
                .unwrap()
                .contains("pip")
        );
        assert_eq!(r.issues_in(BuildStage::BackendInstall).count(), 1);
    }
}
