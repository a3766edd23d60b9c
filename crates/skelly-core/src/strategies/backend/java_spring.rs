use serde_json::json;
use std::path::Path;
use tracing::{info, instrument};

use crate::application::TemplateService;
use crate::application::ports::{InstallCommand, Installer};
use crate::domain::{
    ArchitectureKind, DomainError, ProjectConfig, RelativePath, RenderContext,
    project_config::compact_name,
};
use crate::error::SkellyResult;
use crate::strategies::{BackendStrategy, SERVER_DIR};

/// Group id and optional version for libraries outside Spring Boot's BOM.
const DEPENDENCY_COORDINATES: &[(&str, &str, Option<&str>)] = &[
    ("lombok", "org.projectlombok", Some("1.18.30")),
    ("mapstruct", "org.mapstruct", Some("1.5.5.Final")),
];

const DEFAULT_GROUP: &str = "org.springframework.boot";

/// Hexagonal example sources: template id -> path below the base package.
const HEXAGONAL_SOURCES: &[(&str, &str)] = &[
    ("java_spring/hexagonal/domain/Example.java", "domain/model/Example.java"),
    ("java_spring/hexagonal/domain/ExampleService.java", "domain/service/ExampleService.java"),
    ("java_spring/hexagonal/domain/ExampleRepository.java", "domain/repository/ExampleRepository.java"),
    ("java_spring/hexagonal/domain/ExternalServiceClient.java", "domain/client/ExternalServiceClient.java"),
    ("java_spring/hexagonal/domain/ExampleEventProducer.java", "domain/messaging/ExampleEventProducer.java"),
    ("java_spring/hexagonal/inbound/ExampleRequest.java", "inbound/dto/ExampleRequest.java"),
    ("java_spring/hexagonal/inbound/ExampleResponse.java", "inbound/dto/ExampleResponse.java"),
    ("java_spring/hexagonal/inbound/ExampleController.java", "inbound/rest/ExampleController.java"),
    ("java_spring/hexagonal/inbound/ExampleMessageConsumer.java", "inbound/messaging/ExampleMessageConsumer.java"),
    ("java_spring/hexagonal/inbound/SecurityConfig.java", "inbound/security/SecurityConfig.java"),
    ("java_spring/hexagonal/outbound/ExampleRepositoryImpl.java", "outbound/persistence/ExampleRepositoryImpl.java"),
    ("java_spring/hexagonal/outbound/ExternalServiceClientImpl.java", "outbound/restclient/ExternalServiceClientImpl.java"),
    ("java_spring/hexagonal/outbound/RabbitMQExampleProducer.java", "outbound/messaging/RabbitMQExampleProducer.java"),
    ("java_spring/hexagonal/config/AppConfig.java", "config/AppConfig.java"),
    ("java_spring/hexagonal/Application.java", "Application.java"),
];

/// Spring Boot on Maven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSpringBackend {
    artifact: String,
    package: String,
    package_dir: RelativePath,
}

impl JavaSpringBackend {
    pub fn new(project_name: &str) -> Result<Self, DomainError> {
        let artifact = compact_name(project_name);
        let package = format!("com.example.{artifact}");
        let package_dir = RelativePath::try_new(format!(
            "{SERVER_DIR}/src/main/java/{}",
            package.replace('.', "/")
        ))?;

        Ok(Self {
            artifact,
            package,
            package_dir,
        })
    }

    /// `com.example.<compact name>`
    pub fn base_package(&self) -> &str {
        &self.package
    }

    fn dependencies(libraries: &[String]) -> serde_json::Value {
        libraries
            .iter()
            .map(|lib| {
                let (group, version) = DEPENDENCY_COORDINATES
                    .iter()
                    .find(|(artifact, _, _)| artifact == lib)
                    .map_or((DEFAULT_GROUP, None), |(_, group, version)| {
                        (*group, *version)
                    });
                json!({ "group_id": group, "artifact_id": lib, "version": version })
            })
            .collect()
    }

    #[instrument(skip_all, fields(package = %self.package))]
    fn generate_hexagonal_example(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()> {
        let package_root = base_path.join(&self.package_dir);
        let context = RenderContext::new().with("package", self.package.as_str());

        for (template, relative) in HEXAGONAL_SOURCES {
            templates.render_to_file(template, &package_root.join(relative), &context)?;
        }

        templates.render_to_file(
            "java_spring/application.properties",
            &base_path.join(SERVER_DIR).join("src/main/resources/application.properties"),
            &RenderContext::new().with("project_name", config.name()),
        )?;

        info!(files = HEXAGONAL_SOURCES.len() + 1, "Generated hexagonal example");
        Ok(())
    }
}

impl BackendStrategy for JavaSpringBackend {
    fn folders(&self) -> Vec<RelativePath> {
        vec![RelativePath::from_static("server/src/main/resources")]
    }

    fn name(&self) -> &str {
        "Java Spring Boot"
    }

    fn create_config_files(
        &self,
        config: &ProjectConfig,
        base_path: &Path,
        templates: &TemplateService<'_>,
    ) -> SkellyResult<()> {
        let context = RenderContext::new()
            .with("project_name", self.artifact.as_str())
            .with("dependencies", Self::dependencies(config.backend_libraries()));
        templates.render_to_file(
            "java_spring/pom.xml",
            &base_path.join(SERVER_DIR).join("pom.xml"),
            &context,
        )?;
        info!("Created server/pom.xml");

        if ArchitectureKind::from_label(config.architecture()) == Some(ArchitectureKind::Hexagonal)
        {
            self.generate_hexagonal_example(config, base_path, templates)?;
        }
        Ok(())
    }

    fn install_dependencies(
        &self,
        base_path: &Path,
        installer: &dyn Installer,
    ) -> SkellyResult<()> {
        installer.run(&InstallCommand::new(
            "mvn",
            ["install", "-DskipTests"],
            base_path.join(SERVER_DIR),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_derives_from_compact_name() {
        let backend = JavaSpringBackend::new("My Shop").unwrap();
        assert_eq!(backend.base_package(), "com.example.myshop");
        assert_eq!(
            backend.package_dir.to_string(),
            "server/src/main/java/com/example/myshop"
        );
    }

    #[test]
    fn known_libraries_get_their_own_coordinates() {
        let deps = JavaSpringBackend::dependencies(&[
            "lombok".to_string(),
            "spring-boot-starter-security".to_string(),
            "mapstruct".to_string(),
        ]);
        assert_eq!(deps[0]["group_id"], "org.projectlombok");
        assert_eq!(deps[0]["version"], "1.18.30");
        assert_eq!(deps[1]["group_id"], "org.springframework.boot");
        assert!(deps[1]["version"].is_null());
        assert_eq!(deps[2]["version"], "1.5.5.Final");
    }

    #[test]
    fn dotted_names_stay_inside_the_source_tree() {
        let backend = JavaSpringBackend::new("../evil").unwrap();
        assert!(
            backend
                .package_dir
                .as_path()
                .starts_with("server/src/main/java/com/example")
        );
    }
}
