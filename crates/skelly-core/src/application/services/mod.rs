//! Application services used while a build runs.

pub mod template_service;

pub use template_service::TemplateService;
