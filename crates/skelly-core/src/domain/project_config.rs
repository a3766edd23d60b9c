use std::path::{Path, PathBuf};

use serde::Serialize;

/// Fully-resolved scaffolding request.
///
/// A **Value Object**: every field is private and only readable, so once a
/// `ProjectConfig` exists nothing can change it. `ProjectBuilder` holds the
/// mutable, in-progress state and produces one of these at build time; the
/// `with_*` methods consume `self` and return a new value, they never mutate a
/// config another party is holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    name: String,
    frontend_stack: String,
    backend_stack: String,
    architecture: String,
    frontend_libraries: Vec<String>,
    backend_libraries: Vec<String>,
    output_path: PathBuf,
}

impl ProjectConfig {
    /// Create a config with empty stacks and libraries, rooted in the current
    /// working directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frontend_stack: String::new(),
            backend_stack: String::new(),
            architecture: String::new(),
            frontend_libraries: Vec::new(),
            backend_libraries: Vec::new(),
            output_path: PathBuf::from("."),
        }
    }

    pub fn with_frontend_stack(mut self, stack: impl Into<String>) -> Self {
        self.frontend_stack = stack.into();
        self
    }

    pub fn with_backend_stack(mut self, stack: impl Into<String>) -> Self {
        self.backend_stack = stack.into();
        self
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    pub fn with_frontend_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frontend_libraries = libraries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_backend_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backend_libraries = libraries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frontend_stack(&self) -> &str {
        &self.frontend_stack
    }

    pub fn backend_stack(&self) -> &str {
        &self.backend_stack
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn frontend_libraries(&self) -> &[String] {
        &self.frontend_libraries
    }

    pub fn backend_libraries(&self) -> &[String] {
        &self.backend_libraries
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// `output_path/name`, the directory the build materializes into.
    pub fn project_root(&self) -> PathBuf {
        self.output_path.join(&self.name)
    }

    // ── Derived names ─────────────────────────────────────────────────────

    /// Lowercase with spaces as `-`: "My App" -> "my-app".
    ///
    /// Used for npm package names and Angular project keys.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Lowercase with spaces removed: "My App" -> "myapp".
    ///
    /// Used for Maven artifact ids and Java package segments.
    pub fn compact_name(&self) -> String {
        compact_name(&self.name)
    }
}

/// Shared by strategies that derive a package segment from a raw project name
/// before any `ProjectConfig` exists.
pub fn compact_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ProjectConfig::new("test");
        assert_eq!(config.name(), "test");
        assert_eq!(config.architecture(), "");
        assert!(config.frontend_libraries().is_empty());
        assert!(config.backend_libraries().is_empty());
        assert_eq!(config.output_path(), Path::new("."));
    }

    #[test]
    fn with_all_fields() {
        let config = ProjectConfig::new("myapp")
            .with_frontend_stack("React")
            .with_backend_stack("Express")
            .with_architecture("Hexagonal Architecture")
            .with_frontend_libraries(["react-router-dom"])
            .with_backend_libraries(["helmet", "cors"])
            .with_output_path("/tmp");

        assert_eq!(config.architecture(), "Hexagonal Architecture");
        assert_eq!(config.backend_libraries(), ["helmet", "cors"]);
        assert_eq!(config.project_root(), PathBuf::from("/tmp/myapp"));
    }

    #[test]
    fn libraries_keep_order_and_duplicates() {
        let config = ProjectConfig::new("x").with_backend_libraries(["cors", "helmet", "cors"]);
        assert_eq!(config.backend_libraries(), ["cors", "helmet", "cors"]);
    }

    #[test]
    fn identical_inputs_compare_equal() {
        let a = ProjectConfig::new("same").with_backend_libraries(["zod"]);
        let b = ProjectConfig::new("same").with_backend_libraries(["zod"]);
        assert_eq!(a, b);
        assert_ne!(a, b.with_backend_stack("Express"));
    }

    #[test]
    fn derived_names() {
        let config = ProjectConfig::new("My Awesome App");
        assert_eq!(config.slug(), "my-awesome-app");
        assert_eq!(config.compact_name(), "myawesomeapp");
    }
}
