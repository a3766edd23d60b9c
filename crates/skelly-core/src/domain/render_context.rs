use serde::Serialize;
use serde_json::{Map, Value};

/// Context for template rendering.
///
/// A **Value Object** holding the substitutions a template may reference.
/// Immutable after creation: `with` consumes the context and returns a new one.
///
/// Values are JSON values rather than plain strings so templates can loop over
/// structured data (a Maven dependency list, for example). Keys keep their
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The whole context as a JSON object, the shape template engines expect.
    pub fn as_value(&self) -> Value {
        Value::Object(self.variables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stores_plain_and_structured_values() {
        let ctx = RenderContext::new()
            .with("project_name", "myapp")
            .with("dependencies", json!([{ "artifact_id": "lombok" }]));

        assert_eq!(ctx.get("project_name"), Some(&json!("myapp")));
        assert!(ctx.get("dependencies").unwrap().is_array());
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let ctx = RenderContext::new().with("package", "a").with("package", "b");
        assert_eq!(ctx.get("package"), Some(&json!("b")));
    }

    #[test]
    fn as_value_is_an_object() {
        let ctx = RenderContext::new().with("k", 1);
        assert_eq!(ctx.as_value(), json!({ "k": 1 }));
    }
}
