//! Template payloads for the built-in ML project blueprint.
//!
//! Each function returns one generated file's text as a [`PayloadContent`].
//! These are data, not logic: fixed blocks of text with at most a
//! `{{PROJECT_NAME}}` substitution point. Grouped by what they scaffold:
//!
//! - [`project`] — project-level files (README, requirements, setup.py,
//!   .gitignore, config.yaml)
//! - [`python`]  — Python stub modules and stub tests
//! - [`docs`]    — reports and documentation markdown

pub mod docs;
pub mod project;
pub mod python;

use mlforge_core::domain::PayloadContent;

/// The payload for files that exist only as placeholders (`__init__.py`
/// markers, notebook slots).
pub fn empty() -> PayloadContent {
    PayloadContent::Literal("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlforge_core::domain::RenderContext;

    #[test]
    fn empty_payload_is_empty() {
        let ctx = RenderContext::new("demo");
        assert_eq!(empty().realize(&ctx), "");
    }

    #[test]
    fn only_setup_py_is_parameterized() {
        // The single substitution point in the whole manifest is the
        // packaging descriptor's declared name.
        assert!(project::setup_py().contains_placeholder());
        assert!(!project::readme().contains_placeholder());
        assert!(!project::requirements().contains_placeholder());
        assert!(!project::gitignore().contains_placeholder());
        assert!(!project::config_yaml().contains_placeholder());
        assert!(!python::train().contains_placeholder());
        assert!(!docs::project_overview().contains_placeholder());
    }

    #[test]
    fn setup_py_renders_project_name() {
        let ctx = RenderContext::new("demo");
        let rendered = project::setup_py().realize(&ctx);
        assert!(rendered.contains("name='demo'"));
    }

    #[test]
    fn config_yaml_declares_random_forest_model() {
        let ctx = RenderContext::new("demo");
        let rendered = project::config_yaml().realize(&ctx);
        assert!(rendered.contains("model:"));
        assert!(rendered.contains("type: \"random_forest\""));
    }

    #[test]
    fn payloads_are_deterministic() {
        let ctx = RenderContext::new("demo");
        assert_eq!(
            python::helpers().realize(&ctx),
            python::helpers().realize(&ctx)
        );
        assert_eq!(
            project::setup_py().realize(&ctx),
            project::setup_py().realize(&ctx)
        );
    }
}
