//! Architecture strategies: which backend folders exist.

use crate::domain::{ArchitectureKind, DomainError, RelativePath, project_config::compact_name};
use crate::strategies::{ArchitectureStrategy, SERVER_DIR};

const HEXAGONAL_LAYOUT: &[&str] = &[
    // inbound (driving adapters)
    "inbound/dto",
    "inbound/rest",
    "inbound/messaging",
    "inbound/security",
    // domain
    "domain/model",
    "domain/service",
    "domain/repository",
    "domain/client",
    "domain/messaging",
    // outbound (driven adapters)
    "outbound/persistence",
    "outbound/restclient",
    "outbound/messaging",
    "config",
];

const LAYERED_LAYOUT: &[&str] = &[
    "api/routes",
    "api/controllers",
    "api/middlewares",
    "services",
    "models",
    "repositories",
    "config",
    "utils",
];

fn under(base: &RelativePath, layout: &[&str]) -> Result<Vec<RelativePath>, DomainError> {
    layout.iter().map(|segment| base.join(segment)).collect()
}

/// Ports and adapters: `inbound` / `domain` / `outbound` plus `config`.
///
/// With base package `java` the layout sits inside the Maven source tree
/// (`server/src/main/java/com/example/<compact name>`), otherwise directly
/// under `server/<base_package>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagonalArchitecture {
    folders: Vec<RelativePath>,
}

impl HexagonalArchitecture {
    pub const JAVA_PACKAGE: &'static str = "java";

    pub fn new(project_name: &str, base_package: &str) -> Result<Self, DomainError> {
        let base = if base_package == Self::JAVA_PACKAGE {
            format!(
                "{SERVER_DIR}/src/main/java/com/example/{}",
                compact_name(project_name)
            )
        } else {
            format!("{SERVER_DIR}/{base_package}")
        };
        let base = RelativePath::try_new(base)?;

        Ok(Self {
            folders: under(&base, HEXAGONAL_LAYOUT)?,
        })
    }
}

impl ArchitectureStrategy for HexagonalArchitecture {
    fn folders(&self) -> Vec<RelativePath> {
        self.folders.clone()
    }

    fn name(&self) -> &str {
        ArchitectureKind::Hexagonal.label()
    }
}

/// Classic routes / controllers / services / models layering under
/// `server/<base>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredArchitecture {
    folders: Vec<RelativePath>,
}

impl LayeredArchitecture {
    pub const DEFAULT_BASE: &'static str = "src";

    pub fn new(base: &str) -> Result<Self, DomainError> {
        let base = RelativePath::try_new(format!("{SERVER_DIR}/{base}"))?;
        Ok(Self {
            folders: under(&base, LAYERED_LAYOUT)?,
        })
    }
}

impl ArchitectureStrategy for LayeredArchitecture {
    fn folders(&self) -> Vec<RelativePath> {
        self.folders.clone()
    }

    fn name(&self) -> &str {
        ArchitectureKind::Layered.label()
    }
}

/// Caller-supplied folders, used verbatim and in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomArchitecture {
    folders: Vec<RelativePath>,
}

impl CustomArchitecture {
    pub fn new(folders: Vec<RelativePath>) -> Self {
        Self { folders }
    }

    /// Validate raw user input. Blank entries are skipped.
    pub fn from_strings<I, S>(folders: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folders = folders
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .map(RelativePath::try_new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(folders))
    }
}

impl ArchitectureStrategy for CustomArchitecture {
    fn folders(&self) -> Vec<RelativePath> {
        self.folders.clone()
    }

    fn name(&self) -> &str {
        ArchitectureKind::Custom.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(arch: &dyn ArchitectureStrategy) -> Vec<String> {
        arch.folders().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn hexagonal_java_uses_maven_package_path() {
        let arch = HexagonalArchitecture::new("My Shop", "java").unwrap();
        let folders = strings(&arch);

        assert_eq!(folders.len(), 13);
        assert_eq!(
            folders[0],
            "server/src/main/java/com/example/myshop/inbound/dto"
        );
        assert_eq!(
            folders[12],
            "server/src/main/java/com/example/myshop/config"
        );
    }

    #[test]
    fn hexagonal_other_package_sits_under_server() {
        let arch = HexagonalArchitecture::new("shop", "src").unwrap();
        assert!(strings(&arch).contains(&"server/src/domain/service".to_string()));
    }

    #[test]
    fn hexagonal_is_deterministic() {
        let a = HexagonalArchitecture::new("shop", "java").unwrap();
        let b = HexagonalArchitecture::new("shop", "java").unwrap();
        assert_eq!(a.folders(), b.folders());
    }

    #[test]
    fn hexagonal_rejects_escaping_package() {
        assert!(matches!(
            HexagonalArchitecture::new("shop", "../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn layered_default_base_is_src() {
        let built = LayeredArchitecture::new(LayeredArchitecture::DEFAULT_BASE).unwrap();
        assert_eq!(
            strings(&built),
            [
                "server/src/api/routes",
                "server/src/api/controllers",
                "server/src/api/middlewares",
                "server/src/services",
                "server/src/models",
                "server/src/repositories",
                "server/src/config",
                "server/src/utils",
            ]
        );
    }

    #[test]
    fn custom_keeps_order_and_skips_blanks() {
        let arch = CustomArchitecture::from_strings(["b/x", " ", "a"]).unwrap();
        assert_eq!(strings(&arch), ["b/x", "a"]);
        assert_eq!(arch.name(), "Custom Architecture");
    }

    #[test]
    fn custom_rejects_absolute_folder() {
        assert!(matches!(
            CustomArchitecture::from_strings(["/etc"]),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn names_match_kind_labels() {
        let hex = HexagonalArchitecture::new("x", "src").unwrap();
        assert_eq!(
            ArchitectureKind::from_label(hex.name()),
            Some(ArchitectureKind::Hexagonal)
        );
        let layered = LayeredArchitecture::new("src").unwrap();
        assert_eq!(
            ArchitectureKind::from_label(layered.name()),
            Some(ArchitectureKind::Layered)
        );
    }
}
