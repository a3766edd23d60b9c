//! Tera-backed template renderer.

use std::error::Error as _;
use std::path::Path;

use tera::Tera;
use tracing::{debug, info, instrument};

use skelly_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::SkellyResult,
};

use crate::builtin_templates::BUILTIN_TEMPLATES;
use crate::template_loader::FilesystemTemplateLoader;

/// Renders templates registered by id.
///
/// Templates are parsed once at construction; rendering is then a pure
/// function of (id, context). Autoescaping is off since the output is
/// source code and manifests, not HTML for a browser.
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Renderer over the built-in template set.
    pub fn builtin() -> SkellyResult<Self> {
        Self::from_templates(BUILTIN_TEMPLATES.iter().copied())
    }

    /// Built-in set, with files from `dir` replacing or adding templates.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn with_overrides(dir: &Path) -> SkellyResult<Self> {
        let overrides = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(count = overrides.len(), "Applying template overrides");

        let mut renderer = Self::builtin()?;
        renderer
            .tera
            .add_raw_templates(overrides)
            .map_err(|e| render_error("<overrides>", &e))?;
        Ok(renderer)
    }

    /// Renderer over an explicit set of `(id, source)` pairs.
    pub fn from_templates<I, N, C>(templates: I) -> SkellyResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(templates)
            .map_err(|e| render_error("<builtin>", &e))?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, template_id: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template_id)
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template_id: &str, context: &RenderContext) -> SkellyResult<String> {
        let ctx = tera::Context::from_value(context.as_value())
            .map_err(|e| render_error(template_id, &e))?;
        let output = self
            .tera
            .render(template_id, &ctx)
            .map_err(|e| render_error(template_id, &e))?;
        debug!(template = template_id, bytes = output.len(), "Rendered");
        Ok(output)
    }
}

/// Tera nests the useful message (missing variable, parse position) in the
/// source chain.
fn render_error(template: &str, error: &tera::Error) -> skelly_core::error::SkellyError {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }

    ApplicationError::TemplateRender {
        template: template.to_string(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skelly_core::error::SkellyError;

    fn renderer() -> TeraRenderer {
        TeraRenderer::builtin().unwrap()
    }

    #[test]
    fn every_builtin_template_is_registered() {
        let r = renderer();
        for (id, _) in BUILTIN_TEMPLATES {
            assert!(r.has_template(id), "{id}");
        }
    }

    #[test]
    fn pom_lists_web_starter_and_dependencies() {
        let ctx = RenderContext::new().with("project_name", "myshop").with(
            "dependencies",
            json!([
                { "group_id": "org.projectlombok", "artifact_id": "lombok", "version": "1.18.30" },
                { "group_id": "org.springframework.boot", "artifact_id": "spring-boot-starter-security", "version": null }
            ]),
        );
        let pom = renderer().render("java_spring/pom.xml", &ctx).unwrap();

        assert!(pom.contains("<artifactId>myshop</artifactId>"));
        assert!(pom.contains("spring-boot-starter-web"));
        assert!(pom.contains("<version>1.18.30</version>"));
        assert!(pom.contains("<artifactId>spring-boot-starter-security</artifactId>"));
    }

    #[test]
    fn example_entity_uses_package() {
        let ctx = RenderContext::new().with("package", "com.example.shop");
        let out = renderer()
            .render("java_spring/hexagonal/domain/Example.java", &ctx)
            .unwrap();

        assert!(out.starts_with("package com.example.shop.domain.model;"));
        assert!(out.contains("public class Example"));
        assert!(out.contains("UUID"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = RenderContext::new().with("project_name", "shop");
        let r = renderer();
        assert_eq!(
            r.render("react/index.html", &ctx).unwrap(),
            r.render("react/index.html", &ctx).unwrap()
        );
    }

    #[test]
    fn unknown_template_is_a_render_error() {
        let err = renderer()
            .render("cobol/main.cbl", &RenderContext::new())
            .unwrap_err();
        assert!(matches!(
            err,
            SkellyError::Application(ApplicationError::TemplateRender { ref template, .. })
                if template == "cobol/main.cbl"
        ));
    }

    #[test]
    fn missing_variable_is_a_render_error() {
        let err = renderer()
            .render("java_spring/application.properties", &RenderContext::new())
            .unwrap_err();
        assert!(matches!(
            err,
            SkellyError::Application(ApplicationError::TemplateRender { .. })
        ));
    }

    #[test]
    fn overrides_replace_builtin_templates() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("react")).unwrap();
        std::fs::write(temp.path().join("react/index.html"), "custom {{ project_name }}").unwrap();

        let r = TeraRenderer::with_overrides(temp.path()).unwrap();
        let ctx = RenderContext::new().with("project_name", "shop");

        assert_eq!(r.render("react/index.html", &ctx).unwrap(), "custom shop");
        assert!(r.has_template("java_spring/pom.xml"));
    }
}
