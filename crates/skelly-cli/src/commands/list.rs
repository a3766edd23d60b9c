//! Implementation of the `skelly list` command.

use serde_json::{Value, json};

use skelly_core::domain::{
    ArchitectureKind, BackendStack, FrontendStack, LibraryChoice,
    catalog::{backend_libraries, frontend_libraries},
};

use crate::{
    cli::{ListArgs, ListFormat, ListTopic},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let topics = match args.topic {
        Some(topic) => vec![topic],
        None => vec![ListTopic::Stacks, ListTopic::Architectures, ListTopic::Libraries],
    };

    match args.format {
        ListFormat::Json => {
            let mut document = serde_json::Map::new();
            for topic in topics {
                let (key, value) = topic_json(topic);
                document.insert(key.into(), value);
            }
            output.json(&Value::Object(document))?;
        }
        ListFormat::Table => {
            for topic in topics {
                print_topic(topic, &output)?;
            }
        }
    }

    Ok(())
}

fn topic_json(topic: ListTopic) -> (&'static str, Value) {
    match topic {
        ListTopic::Stacks => (
            "stacks",
            json!({
                "backend": BackendStack::ALL
                    .iter()
                    .map(|s| json!({ "key": s.as_str(), "label": s.label() }))
                    .collect::<Vec<_>>(),
                "frontend": FrontendStack::ALL
                    .iter()
                    .map(|s| json!({ "key": s.as_str(), "label": s.label() }))
                    .collect::<Vec<_>>(),
            }),
        ),
        ListTopic::Architectures => (
            "architectures",
            ArchitectureKind::ALL
                .iter()
                .map(|a| json!({ "key": a.as_str(), "label": a.label() }))
                .collect(),
        ),
        ListTopic::Libraries => {
            let mut libraries = serde_json::Map::new();
            for stack in BackendStack::ALL {
                libraries.insert(stack.as_str().into(), libraries_json(backend_libraries(stack)));
            }
            for stack in FrontendStack::ALL.into_iter().filter(|s| !s.is_none()) {
                libraries.insert(stack.as_str().into(), libraries_json(frontend_libraries(stack)));
            }
            ("libraries", Value::Object(libraries))
        }
    }
}

fn libraries_json(libraries: &[LibraryChoice]) -> Value {
    libraries
        .iter()
        .map(|lib| json!({ "title": lib.title, "value": lib.value }))
        .collect()
}

fn print_topic(topic: ListTopic, output: &OutputManager) -> CliResult<()> {
    match topic {
        ListTopic::Stacks => {
            output.header("Backend stacks:")?;
            for stack in BackendStack::ALL {
                output.print(&format!("  {:<10} {}", stack.as_str(), stack.label()))?;
            }
            output.header("Frontend stacks:")?;
            for stack in FrontendStack::ALL {
                output.print(&format!("  {:<10} {}", stack.as_str(), stack.label()))?;
            }
        }
        ListTopic::Architectures => {
            output.header("Architectures:")?;
            for kind in ArchitectureKind::ALL {
                output.print(&format!("  {:<10} {}", kind.as_str(), kind.label()))?;
            }
        }
        ListTopic::Libraries => {
            output.header("Libraries:")?;
            for stack in BackendStack::ALL {
                print_libraries(stack.label(), backend_libraries(stack), output)?;
            }
            for stack in FrontendStack::ALL.into_iter().filter(|s| !s.is_none()) {
                print_libraries(stack.label(), frontend_libraries(stack), output)?;
            }
        }
    }
    output.print("")?;
    Ok(())
}

fn print_libraries(
    label: &str,
    libraries: &[LibraryChoice],
    output: &OutputManager,
) -> CliResult<()> {
    output.print(&format!("  {label}"))?;
    for lib in libraries {
        output.print(&format!("    {:<32} {}", lib.value, lib.title))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_json_lists_every_backend() {
        let (key, value) = topic_json(ListTopic::Stacks);
        assert_eq!(key, "stacks");
        let keys: Vec<_> = value["backend"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, ["java", "express", "django"]);
    }

    #[test]
    fn libraries_json_skips_backend_only_frontend() {
        let (_, value) = topic_json(ListTopic::Libraries);
        assert!(value.get("none").is_none());
        assert!(
            value["express"]
                .as_array()
                .unwrap()
                .iter()
                .any(|lib| lib["value"] == "helmet")
        );
    }

    #[test]
    fn architectures_json_uses_display_labels() {
        let (_, value) = topic_json(ListTopic::Architectures);
        assert_eq!(value[0]["label"], "Hexagonal Architecture");
    }
}
