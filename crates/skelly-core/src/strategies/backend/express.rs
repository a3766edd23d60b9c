use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::info;

use crate::application::TemplateService;
use crate::application::ports::{InstallCommand, Installer};
use crate::domain::{ArchitectureKind, ProjectConfig, RelativePath, RenderContext};
use crate::error::SkellyResult;
use crate::strategies::{BackendStrategy, SERVER_DIR, split_packages, to_manifest};

const HEXAGONAL_SOURCES: &[(&str, &str)] = &[
    ("express/hexagonal/index.js", "src/index.js"),
    ("express/hexagonal/domain/ExampleService.js", "src/domain/service/ExampleService.js"),
    ("express/hexagonal/domain/ExampleRepository.js", "src/domain/repository/ExampleRepository.js"),
    (
        "express/hexagonal/outbound/InMemoryExampleRepository.js",
        "src/outbound/persistence/InMemoryExampleRepository.js",
    ),
    ("express/hexagonal/inbound/ExampleController.js", "src/inbound/rest/ExampleController.js"),
];

/// Node.js with Express, managed by npm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressBackend;

impl ExpressBackend {
    pub fn new() -> Self {
        Self
    }

    fn package_json(config: &ProjectConfig) -> Value {
        let mut dependencies = Map::new();
        dependencies.insert("express".into(), json!("^4.18.2"));
        for package in split_packages(config.backend_libraries()) {
            dependencies.insert(package.into(), json!("latest"));
        }

        json!({
            "name": format!("{}-server", config.slug()),
            "version": "0.1.0",
            "private": true,
            "main": "src/index.js",
            "scripts": {
                "start": "node src/index.js"
            },
            "dependencies": dependencies,
        })
    }
}

impl BackendStrategy for ExpressBackend {
    fn folders(&self) -> Vec<RelativePath> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "Express.js"
    }

    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()> {
        let server = base_path.join(SERVER_DIR);
        templates.write_file(
            &server.join("package.json"),
            &to_manifest(&Self::package_json(config))?,
        )?;
        info!("Created server/package.json");

        if ArchitectureKind::from_label(config.architecture()) == Some(ArchitectureKind::Hexagonal)
        {
            let context = RenderContext::new().with("project_name", config.slug());
            for (template, relative) in HEXAGONAL_SOURCES {
                templates.render_to_file(template, &server.join(relative), &context)?;
            }
            info!(files = HEXAGONAL_SOURCES.len(), "Generated hexagonal example");
        }
        Ok(())
    }

    fn install_dependencies(
        &self,
        base_path: &Path,
        installer: &dyn Installer,
    ) -> SkellyResult<()> {
        installer.run(&InstallCommand::new(
            "npm",
            ["install"],
            base_path.join(SERVER_DIR),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_json_lists_express_first_then_split_libraries() {
        let config = ProjectConfig::new("My Api")
            .with_backend_libraries(["helmet", "cors morgan"]);
        let manifest = ExpressBackend::package_json(&config);

        assert_eq!(manifest["name"], "my-api-server");
        let keys: Vec<_> = manifest["dependencies"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["express", "helmet", "cors", "morgan"]);
        assert_eq!(manifest["dependencies"]["cors"], "latest");
    }
}
