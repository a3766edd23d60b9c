//! Template Service - rendering composed with file writes.
//!
//! Strategies receive a `TemplateService` in `create_config_files`; it is the
//! only way they touch the disk.

use std::path::Path;
use tracing::debug;

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::RenderContext,
    error::SkellyResult,
};

/// Renders templates and writes generated files through the ports.
#[derive(Clone, Copy)]
pub struct TemplateService<'a> {
    renderer: &'a dyn TemplateRenderer,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateService<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Render a template to a string.
    pub fn render(&self, template_id: &str, context: &RenderContext) -> SkellyResult<String> {
        self.renderer.render(template_id, context)
    }

    /// Render a template and write it to `path`, creating parent directories.
    ///
    /// Rendering happens first, so a failed render never leaves a partial file.
    pub fn render_to_file(
        &self,
        template_id: &str,
        path: &Path,
        context: &RenderContext,
    ) -> SkellyResult<()> {
        let content = self.render(template_id, context)?;
        debug!(template = template_id, path = %path.display(), "Rendered template");
        self.write_file(path, &content)
    }

    /// Write literal content to `path`, creating parent directories.
    pub fn write_file(&self, path: &Path, content: &str) -> SkellyResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}
