//! Explicit registry from catalog choices to strategy instances.

use tracing::debug;

use crate::domain::{ArchitectureKind, BackendStack, DomainError, FrontendStack};
use crate::strategies::{
    AngularFrontend, ArchitectureStrategy, BackendStrategy, CustomArchitecture, DjangoBackend,
    ExpressBackend, FrontendStrategy, HexagonalArchitecture, JavaSpringBackend,
    LayeredArchitecture, LitFrontend, ReactFrontend,
};

pub struct StrategyFactory;

impl StrategyFactory {
    /// Build the architecture strategy for a choice.
    ///
    /// Hexagonal uses the Maven package layout for the Java backend and
    /// `server/src` otherwise. Custom requires `custom_folders`.
    pub fn create_architecture(
        kind: ArchitectureKind,
        project_name: &str,
        backend: Option<BackendStack>,
        custom_folders: Option<&[String]>,
    ) -> Result<Box<dyn ArchitectureStrategy>, DomainError> {
        debug!(architecture = kind.as_str(), "Creating architecture strategy");
        Ok(match kind {
            ArchitectureKind::Hexagonal => {
                let base_package = match backend {
                    Some(BackendStack::Java) => HexagonalArchitecture::JAVA_PACKAGE,
                    _ => LayeredArchitecture::DEFAULT_BASE,
                };
                Box::new(HexagonalArchitecture::new(project_name, base_package)?)
            }
            ArchitectureKind::Layered => {
                Box::new(LayeredArchitecture::new(LayeredArchitecture::DEFAULT_BASE)?)
            }
            ArchitectureKind::Custom => {
                let folders = custom_folders
                    .filter(|folders| folders.iter().any(|f| !f.trim().is_empty()))
                    .ok_or(DomainError::MissingCustomFolders)?;
                Box::new(CustomArchitecture::from_strings(folders)?)
            }
        })
    }

    pub fn create_backend(
        stack: BackendStack,
        project_name: &str,
    ) -> Result<Box<dyn BackendStrategy>, DomainError> {
        debug!(backend = stack.as_str(), "Creating backend strategy");
        Ok(match stack {
            BackendStack::Java => Box::new(JavaSpringBackend::new(project_name)?),
            BackendStack::Express => Box::new(ExpressBackend::new()),
            BackendStack::Django => Box::new(DjangoBackend::new()),
        })
    }

    /// `None` for a backend-only project.
    pub fn create_frontend(stack: FrontendStack) -> Option<Box<dyn FrontendStrategy>> {
        match stack {
            FrontendStack::React => Some(Box::new(ReactFrontend::new())),
            FrontendStack::Lit => Some(Box::new(LitFrontend::new())),
            FrontendStack::Angular => Some(Box::new(AngularFrontend::new())),
            FrontendStack::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagonal_for_java_uses_package_layout() {
        let arch = StrategyFactory::create_architecture(
            ArchitectureKind::Hexagonal,
            "shop",
            Some(BackendStack::Java),
            None,
        )
        .unwrap();
        assert!(
            arch.folders()[0]
                .as_path()
                .starts_with("server/src/main/java/com/example/shop")
        );
    }

    #[test]
    fn hexagonal_for_express_uses_server_src() {
        let arch = StrategyFactory::create_architecture(
            ArchitectureKind::Hexagonal,
            "shop",
            Some(BackendStack::Express),
            None,
        )
        .unwrap();
        assert_eq!(arch.folders()[0].to_string(), "server/src/inbound/dto");
    }

    #[test]
    fn custom_without_folders_is_rejected() {
        let result =
            StrategyFactory::create_architecture(ArchitectureKind::Custom, "shop", None, None);
        assert!(matches!(result, Err(DomainError::MissingCustomFolders)));

        let blank = vec![" ".to_string()];
        let result = StrategyFactory::create_architecture(
            ArchitectureKind::Custom,
            "shop",
            None,
            Some(&blank),
        );
        assert!(matches!(result, Err(DomainError::MissingCustomFolders)));
    }

    #[test]
    fn custom_with_folders_keeps_them() {
        let folders = vec!["api".to_string(), "lib/core".to_string()];
        let arch = StrategyFactory::create_architecture(
            ArchitectureKind::Custom,
            "shop",
            None,
            Some(&folders),
        )
        .unwrap();
        assert_eq!(arch.folders().len(), 2);
        assert_eq!(arch.name(), ArchitectureKind::Custom.label());
    }

    #[test]
    fn backend_names() {
        let names: Vec<String> = BackendStack::ALL
            .into_iter()
            .map(|s| StrategyFactory::create_backend(s, "shop").unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["Java Spring Boot", "Express.js", "Django"]);
    }

    #[test]
    fn no_frontend_for_backend_only() {
        assert!(StrategyFactory::create_frontend(FrontendStack::None).is_none());
        assert_eq!(
            StrategyFactory::create_frontend(FrontendStack::Lit)
                .unwrap()
                .name(),
            "Lit"
        );
    }
}
