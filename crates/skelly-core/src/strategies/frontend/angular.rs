use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::info;

use crate::application::TemplateService;
use crate::domain::{ProjectConfig, RelativePath, RenderContext};
use crate::error::SkellyResult;
use crate::strategies::{FRONTEND_DIR, FrontendStrategy, split_packages, to_manifest};

const ANGULAR_VERSION: &str = "^17.0.0";

const ANGULAR_PACKAGES: &[&str] = &[
    "@angular/animations",
    "@angular/common",
    "@angular/compiler",
    "@angular/core",
    "@angular/forms",
    "@angular/platform-browser",
    "@angular/platform-browser-dynamic",
    "@angular/router",
];

/// Angular 17 workspace driven by the Angular CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AngularFrontend;

impl AngularFrontend {
    pub fn new() -> Self {
        Self
    }

    fn package_json(config: &ProjectConfig) -> Value {
        let mut dependencies: Map<String, Value> = ANGULAR_PACKAGES
            .iter()
            .map(|p| (p.to_string(), json!(ANGULAR_VERSION)))
            .collect();
        dependencies.insert("rxjs".into(), json!("~7.8.0"));
        dependencies.insert("tslib".into(), json!("^2.6.0"));
        dependencies.insert("zone.js".into(), json!("~0.14.0"));
        for package in split_packages(config.frontend_libraries()) {
            dependencies.insert(package.into(), json!("latest"));
        }

        json!({
            "name": format!("{}-frontend", config.slug()),
            "version": "0.1.0",
            "scripts": {
                "ng": "ng",
                "start": "ng serve",
                "build": "ng build",
                "test": "ng test"
            },
            "dependencies": dependencies,
            "devDependencies": {
                "@angular-devkit/build-angular": ANGULAR_VERSION,
                "@angular/cli": ANGULAR_VERSION,
                "@angular/compiler-cli": ANGULAR_VERSION,
                "typescript": "~5.2.0"
            },
        })
    }

    fn angular_json(config: &ProjectConfig) -> Value {
        let mut projects = Map::new();
        projects.insert(
            config.slug(),
            json!({
                "projectType": "application",
                "root": "",
                "sourceRoot": "src",
                "architect": {
                    "build": {
                        "builder": "@angular-devkit/build-angular:application",
                        "options": {
                            "outputPath": "dist",
                            "index": "src/index.html",
                            "browser": "src/main.ts",
                            "tsConfig": "tsconfig.json"
                        }
                    },
                    "serve": {
                        "builder": "@angular-devkit/build-angular:dev-server"
                    }
                }
            }),
        );

        json!({
            "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
            "version": 1,
            "newProjectRoot": "projects",
            "projects": projects,
        })
    }
}

impl FrontendStrategy for AngularFrontend {
    fn folders(&self) -> Vec<RelativePath> {
        [
            "frontend/src/app/components",
            "frontend/src/app/services",
            "frontend/src/app/pages",
            "frontend/src/assets",
            "frontend/src/environments",
        ]
        .into_iter()
        .map(RelativePath::from_static)
        .collect()
    }

    fn name(&self) -> &str {
        "Angular"
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
        templates.write_file(
            &frontend.join("angular.json"),
            &to_manifest(&Self::angular_json(config))?,
        )?;
        templates.render_to_file(
            "angular/index.html",
            &frontend.join("src/index.html"),
            &RenderContext::new().with("project_name", config.name()),
        )?;

        info!("Created Angular frontend config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angular_json_is_keyed_by_slug() {
        let config = ProjectConfig::new("Admin Panel");
        let manifest = AngularFrontend::angular_json(&config);
        assert!(manifest["projects"]["admin-panel"].is_object());
        assert_eq!(
            manifest["projects"]["admin-panel"]["architect"]["build"]["options"]["index"],
            "src/index.html"
        );
    }

    #[test]
    fn core_packages_precede_selected_libraries() {
        let config = ProjectConfig::new("admin").with_frontend_libraries(["@angular/material"]);
        let manifest = AngularFrontend::package_json(&config);
        let keys: Vec<_> = manifest["dependencies"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys.first().map(String::as_str), Some("@angular/animations"));
        assert_eq!(keys.last().map(String::as_str), Some("@angular/material"));
    }
}
