//! Filesystem-based template loader.
//!
//! Reads a directory of user templates that override (or extend) the
//! built-in set. A template's id is its path relative to the directory,
//! always with `/` separators:
//!
//! ```text
//! my-templates/
//! ├── java_spring/
//! │   └── pom.xml            → "java_spring/pom.xml"
//! └── react/
//!     └── index.html         → "react/index.html"
//! ```
//!
//! Hidden files and directories (leading `.`) are skipped.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use skelly_core::{application::ApplicationError, error::SkellyResult};

/// Loads `(id, source)` pairs from a template directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Read every template file below the directory.
    ///
    /// A missing directory or an unreadable entry is an error. A file that is
    /// not valid UTF-8 is skipped with a warning.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> SkellyResult<Vec<(String, String)>> {
        if !self.templates_dir.is_dir() {
            return Err(self.error(&self.templates_dir, "not a directory"));
        }

        let mut templates = Vec::new();
        let walker = WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.templates_dir).to_path_buf();
                self.error(&path, &e.to_string())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(id) = self.template_id(entry.path()) else {
                continue;
            };
            match std::fs::read_to_string(entry.path()) {
                Ok(source) => {
                    debug!(template = %id, "Loaded template override");
                    templates.push((id, source));
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    warn!(path = %entry.path().display(), "Skipping non UTF-8 template file");
                }
                Err(e) => return Err(self.error(entry.path(), &e.to_string())),
            }
        }

        debug!(count = templates.len(), "Finished loading templates");
        Ok(templates)
    }

    fn template_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.templates_dir).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }

    fn error(&self, path: &Path, reason: &str) -> skelly_core::error::SkellyError {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: format!("Failed to load templates: {reason}"),
        }
        .into()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn ids_use_forward_slashes() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "java_spring/pom.xml", "<project/>");
        write(temp.path(), "react/index.html", "<html/>");

        let loaded = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        let ids: Vec<_> = loaded.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, ["java_spring/pom.xml", "react/index.html"]);
        assert_eq!(loaded[0].1, "<project/>");
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".git/config", "x");
        write(temp.path(), "lit/.DS_Store", "x");
        write(temp.path(), "lit/index.html", "<html/>");

        let loaded = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = FilesystemTemplateLoader::new(temp.path().join("nope")).load_all();
        assert!(result.is_err());
    }
}
