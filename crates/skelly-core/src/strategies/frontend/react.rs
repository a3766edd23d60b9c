use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::info;

use crate::application::TemplateService;
use crate::domain::{ProjectConfig, RelativePath, RenderContext};
use crate::error::SkellyResult;
use crate::strategies::{FRONTEND_DIR, FrontendStrategy, split_packages, to_manifest};

/// Build-time tooling that belongs in `devDependencies`.
const DEV_PACKAGES: &[&str] = &["tailwindcss", "postcss", "autoprefixer"];

/// React on Vite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactFrontend;

impl ReactFrontend {
    pub fn new() -> Self {
        Self
    }

    fn package_json(config: &ProjectConfig) -> Value {
        let mut dependencies = Map::new();
        dependencies.insert("react".into(), json!("^18.2.0"));
        dependencies.insert("react-dom".into(), json!("^18.2.0"));

        let mut dev_dependencies = Map::new();
        dev_dependencies.insert("@vitejs/plugin-react".into(), json!("^4.2.0"));
        dev_dependencies.insert("vite".into(), json!("^5.0.0"));

        for package in split_packages(config.frontend_libraries()) {
            let target = if DEV_PACKAGES.contains(&package) {
                &mut dev_dependencies
            } else {
                &mut dependencies
            };
            target.insert(package.into(), json!("latest"));
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
            "devDependencies": dev_dependencies,
        })
    }
}

impl FrontendStrategy for ReactFrontend {
    fn folders(&self) -> Vec<RelativePath> {
        [
            "frontend/src/components",
            "frontend/src/hooks",
            "frontend/src/pages",
            "frontend/src/services",
            "frontend/src/assets",
            "frontend/public",
        ]
        .into_iter()
        .map(RelativePath::from_static)
        .collect()
    }

    fn name(&self) -> &str {
        "React"
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
        templates.render_to_file("react/vite.config.js", &frontend.join("vite.config.js"), &context)?;
        templates.render_to_file("react/index.html", &frontend.join("index.html"), &context)?;

        info!("Created React frontend config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tailwind_tooling_goes_to_dev_dependencies() {
        let config = ProjectConfig::new("Shop")
            .with_frontend_libraries(["react-router-dom", "tailwindcss postcss autoprefixer"]);
        let manifest = ReactFrontend::package_json(&config);

        assert_eq!(manifest["name"], "shop-frontend");
        assert_eq!(manifest["dependencies"]["react-router-dom"], "latest");
        assert!(manifest["dependencies"].get("tailwindcss").is_none());
        assert_eq!(manifest["devDependencies"]["tailwindcss"], "latest");
        assert_eq!(manifest["devDependencies"]["autoprefixer"], "latest");
    }

    #[test]
    fn folders_live_under_frontend() {
        assert!(
            ReactFrontend
                .folders()
                .iter()
                .all(|f| f.as_path().starts_with("frontend"))
        );
    }
}
