//! Template payloads and their rendering context.
//!
//! A payload is one generated file's text. It is either a fixed literal or a
//! parameterized string with `{{VARIABLE}}` placeholders. The only built-in
//! variable is the project name; payloads are otherwise deterministic.

use std::collections::HashMap;

/// Variable substitution context for parameterized payloads.
///
/// Built-in variables are `SCREAMING_SNAKE_CASE` to avoid collision with any
/// user-defined additions.
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "churn_model" | User input |
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Original project name as provided by the user.
    /// Kept separate from the variable map for debugging and display.
    project_name: String,

    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        // The contract between mlforge and its payloads: any payload using
        // {{PROJECT_NAME}} can expect this to exist.
        vars.insert("PROJECT_NAME".to_string(), name.clone());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace — adequate for payloads of a few KB
    /// with a variable count you can count on one hand. Unknown placeholders
    /// are left verbatim rather than erroring.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// The two kinds of template payload.
///
/// `Literal` content is written byte-for-byte; `Parameterized` content goes
/// through [`RenderContext::render`] first. Payload text lives in the binary
/// as `&'static str` — there is no external template loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadContent {
    Literal(&'static str),
    Parameterized(&'static str),
}

impl PayloadContent {
    /// Produce the final file content for this payload.
    pub fn realize(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Parameterized(text) => ctx.render(text),
        }
    }

    /// Whether the raw text still contains a `{{` placeholder opener.
    pub fn contains_placeholder(&self) -> bool {
        match self {
            Self::Literal(text) | Self::Parameterized(text) => text.contains("{{"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_ignores_context() {
        let ctx = RenderContext::new("demo");
        let payload = PayloadContent::Literal("name='{{PROJECT_NAME}}'");
        assert_eq!(payload.realize(&ctx), "name='{{PROJECT_NAME}}'");
    }

    #[test]
    fn parameterized_substitutes() {
        let ctx = RenderContext::new("demo");
        let payload = PayloadContent::Parameterized("name='{{PROJECT_NAME}}'");
        assert_eq!(payload.realize(&ctx), "name='demo'");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let ctx = RenderContext::new("demo");
        let payload = PayloadContent::Parameterized("{{PROJECT_NAME}}/{{PROJECT_NAME}}");
        assert_eq!(payload.realize(&ctx), "demo/demo");
    }

    #[test]
    fn placeholder_detection() {
        assert!(PayloadContent::Parameterized("{{PROJECT_NAME}}").contains_placeholder());
        assert!(!PayloadContent::Literal("plain text").contains_placeholder());
    }
}
