use std::path::Path;
use tracing::info;

use crate::application::TemplateService;
use crate::application::ports::{InstallCommand, Installer};
use crate::domain::{ProjectConfig, RelativePath};
use crate::error::SkellyResult;
use crate::strategies::{BackendStrategy, SERVER_DIR};

/// Django, managed by pip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DjangoBackend;

impl DjangoBackend {
    pub fn new() -> Self {
        Self
    }

    /// `django>=4.2` followed by the selected libraries, one per line.
    fn requirements(config: &ProjectConfig) -> String {
        std::iter::once("django>=4.2")
            .chain(config.backend_libraries().iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BackendStrategy for DjangoBackend {
    fn folders(&self) -> Vec<RelativePath> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "Django"
    }

    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()> {
        templates.write_file(
            &base_path.join(SERVER_DIR).join("requirements.txt"),
            &Self::requirements(config),
        )?;
        info!("Created server/requirements.txt");
        Ok(())
    }

    fn install_dependencies(
        &self,
        base_path: &Path,
        installer: &dyn Installer,
    ) -> SkellyResult<()> {
        installer.run(&InstallCommand::new(
            "pip",
            ["install", "-r", "requirements.txt"],
            base_path.join(SERVER_DIR),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_start_with_django() {
        let config = ProjectConfig::new("site")
            .with_backend_libraries(["djangorestframework", "celery"]);
        assert_eq!(
            DjangoBackend::requirements(&config),
            "django>=4.2\ndjangorestframework\ncelery"
        );
    }

    #[test]
    fn requirements_without_libraries() {
        assert_eq!(
            DjangoBackend::requirements(&ProjectConfig::new("site")),
            "django>=4.2"
        );
    }
}
