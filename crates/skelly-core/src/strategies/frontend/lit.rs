use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::info;

use crate::application::TemplateService;
use crate::domain::{ProjectConfig, RelativePath, RenderContext};
use crate::error::SkellyResult;
use crate::strategies::{FRONTEND_DIR, FrontendStrategy, split_packages, to_manifest};

/// Lit web components on Vite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LitFrontend;

impl LitFrontend {
    pub fn new() -> Self {
        Self
    }

    fn package_json(config: &ProjectConfig) -> Value {
        let mut dependencies = Map::new();
        dependencies.insert("lit".into(), json!("^3.1.0"));
        for package in split_packages(config.frontend_libraries()) {
            dependencies.insert(package.into(), json!("latest"));
        }

        json!({
            "name": format!("{}-frontend", config.slug()),
            "private": true,
            "version": "0.1.0",
            "type": "module",
            "scripts": {
                "dev": "vite",
                "build": "vite build",
                "preview": "vite preview"
            },
            "dependencies": dependencies,
            "devDependencies": { "vite": "^5.0.0" },
        })
    }
}

impl FrontendStrategy for LitFrontend {
    fn folders(&self) -> Vec<RelativePath> {
        ["frontend/src/components", "frontend/src/styles", "frontend/public"]
            .into_iter()
            .map(RelativePath::from_static)
            .collect()
    }

    fn name(&self) -> &str {
        "Lit"
    }

    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()> {
        let frontend = base_path.join(FRONTEND_DIR);
        templates.write_file(
            &frontend.join("package.json"),
            &to_manifest(&Self::package_json(config))?,
        )?;

        let context = RenderContext::new().with("project_name", config.name());
        templates.render_to_file("lit/vite.config.js", &frontend.join("vite.config.js"), &context)?;
        templates.render_to_file("lit/index.html", &frontend.join("index.html"), &context)?;

        info!("Created Lit frontend config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_is_a_runtime_dependency() {
        let config = ProjectConfig::new("widgets").with_frontend_libraries(["@lit-labs/router"]);
        let manifest = LitFrontend::package_json(&config);
        assert_eq!(manifest["dependencies"]["lit"], "^3.1.0");
        assert_eq!(manifest["dependencies"]["@lit-labs/router"], "latest");
        assert_eq!(manifest["devDependencies"]["vite"], "^5.0.0");
    }
}
