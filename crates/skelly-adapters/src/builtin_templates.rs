//! Built-in template set.
//!
//! Every template ships inside the binary via `include_str!`, keyed by its
//! path below `crates/skelly-adapters/templates/`. Strategies in
//! `skelly-core` refer to templates by these ids.
//!
//! # Overrides
//!
//! A directory loaded with [`FilesystemTemplateLoader`](crate::template_loader::FilesystemTemplateLoader)
//! may replace any of these by providing a file at the same relative path.

/// `(template id, source)` pairs.
pub static BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("java_spring/application.properties", include_str!("../templates/java_spring/application.properties")),
    ("java_spring/pom.xml", include_str!("../templates/java_spring/pom.xml")),
    ("java_spring/hexagonal/Application.java", include_str!("../templates/java_spring/hexagonal/Application.java")),
    ("java_spring/hexagonal/config/AppConfig.java", include_str!("../templates/java_spring/hexagonal/config/AppConfig.java")),
    ("java_spring/hexagonal/domain/Example.java", include_str!("../templates/java_spring/hexagonal/domain/Example.java")),
    ("java_spring/hexagonal/domain/ExampleEventProducer.java", include_str!("../templates/java_spring/hexagonal/domain/ExampleEventProducer.java")),
    ("java_spring/hexagonal/domain/ExampleRepository.java", include_str!("../templates/java_spring/hexagonal/domain/ExampleRepository.java")),
    ("java_spring/hexagonal/domain/ExampleService.java", include_str!("../templates/java_spring/hexagonal/domain/ExampleService.java")),
    ("java_spring/hexagonal/domain/ExternalServiceClient.java", include_str!("../templates/java_spring/hexagonal/domain/ExternalServiceClient.java")),
    ("java_spring/hexagonal/inbound/ExampleController.java", include_str!("../templates/java_spring/hexagonal/inbound/ExampleController.java")),
    ("java_spring/hexagonal/inbound/ExampleMessageConsumer.java", include_str!("../templates/java_spring/hexagonal/inbound/ExampleMessageConsumer.java")),
    ("java_spring/hexagonal/inbound/ExampleRequest.java", include_str!("../templates/java_spring/hexagonal/inbound/ExampleRequest.java")),
    ("java_spring/hexagonal/inbound/ExampleResponse.java", include_str!("../templates/java_spring/hexagonal/inbound/ExampleResponse.java")),
    ("java_spring/hexagonal/inbound/SecurityConfig.java", include_str!("../templates/java_spring/hexagonal/inbound/SecurityConfig.java")),
    ("java_spring/hexagonal/outbound/ExampleRepositoryImpl.java", include_str!("../templates/java_spring/hexagonal/outbound/ExampleRepositoryImpl.java")),
    ("java_spring/hexagonal/outbound/ExternalServiceClientImpl.java", include_str!("../templates/java_spring/hexagonal/outbound/ExternalServiceClientImpl.java")),
    ("java_spring/hexagonal/outbound/RabbitMQExampleProducer.java", include_str!("../templates/java_spring/hexagonal/outbound/RabbitMQExampleProducer.java")),
    ("express/hexagonal/index.js", include_str!("../templates/express/hexagonal/index.js")),
    ("express/hexagonal/domain/ExampleRepository.js", include_str!("../templates/express/hexagonal/domain/ExampleRepository.js")),
    ("express/hexagonal/domain/ExampleService.js", include_str!("../templates/express/hexagonal/domain/ExampleService.js")),
    ("express/hexagonal/inbound/ExampleController.js", include_str!("../templates/express/hexagonal/inbound/ExampleController.js")),
    ("express/hexagonal/outbound/InMemoryExampleRepository.js", include_str!("../templates/express/hexagonal/outbound/InMemoryExampleRepository.js")),
    ("react/index.html", include_str!("../templates/react/index.html")),
    ("react/vite.config.js", include_str!("../templates/react/vite.config.js")),
    ("lit/index.html", include_str!("../templates/lit/index.html")),
    ("lit/vite.config.js", include_str!("../templates/lit/vite.config.js")),
    ("angular/index.html", include_str!("../templates/angular/index.html")),
];

/// All built-in template ids, in table order.
pub fn template_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|(id, _)| *id)
}
