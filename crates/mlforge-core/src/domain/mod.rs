//! Core domain layer for mlforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and filesystem concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    layout::{DirectoryTree, FileEntry, FileManifest, ProjectLayout},
    payload::{PayloadContent, RenderContext},
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Directory Tree Tests
    // ========================================================================

    #[test]
    fn tree_flatten_visits_every_node_once() {
        let tree = DirectoryTree::new("demo")
            .with_child(
                DirectoryTree::new("data")
                    .with_child(DirectoryTree::new("raw"))
                    .with_child(DirectoryTree::new("processed")),
            )
            .with_child(DirectoryTree::new("notebooks"));

        let paths: Vec<String> = tree.flatten().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "demo",
                "demo/data",
                "demo/data/raw",
                "demo/data/processed",
                "demo/notebooks"
            ]
        );
    }

    #[test]
    fn tree_flatten_parents_precede_children() {
        let tree = DirectoryTree::new("root")
            .with_child(DirectoryTree::new("a").with_child(DirectoryTree::new("b")));

        let paths = tree.flatten();
        let parent_idx = paths.iter().position(|p| p.to_string() == "root/a").unwrap();
        let child_idx = paths
            .iter()
            .position(|p| p.to_string() == "root/a/b")
            .unwrap();
        assert!(parent_idx < child_idx);
    }

    // ========================================================================
    // File Manifest Tests
    // ========================================================================

    #[test]
    fn manifest_preserves_insertion_order() {
        let mut manifest = FileManifest::new();
        manifest.insert("demo/README.md", "readme".into()).unwrap();
        manifest.insert("demo/setup.py", "setup".into()).unwrap();

        let paths: Vec<String> = manifest.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["demo/README.md", "demo/setup.py"]);
    }

    #[test]
    fn manifest_rejects_duplicate_paths() {
        let mut manifest = FileManifest::new();
        manifest.insert("demo/README.md", "a".into()).unwrap();
        let err = manifest.insert("demo/README.md", "b".into()).unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePath { .. }));
    }

    // ========================================================================
    // Project Layout Tests
    // ========================================================================

    #[test]
    fn layout_validates_successfully() {
        let tree = DirectoryTree::new("demo").with_child(DirectoryTree::new("src"));
        let mut manifest = FileManifest::new();
        manifest.insert("demo/src/main.py", "".into()).unwrap();

        let layout = ProjectLayout::new(tree, manifest);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn empty_layout_is_invalid() {
        let layout = ProjectLayout::new(DirectoryTree::new("demo"), FileManifest::new());
        // A bare root with no files is still a valid (if useless) layout;
        // truly empty means an empty root name.
        assert!(layout.validate().is_ok());

        let bad = ProjectLayout::new(DirectoryTree::new(""), FileManifest::new());
        assert!(bad.validate().is_err());
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_substitutes_project_name() {
        let ctx = RenderContext::new("demo");
        assert_eq!(ctx.render("name='{{PROJECT_NAME}}'"), "name='demo'");
    }

    #[test]
    fn render_context_custom_variables() {
        let ctx = RenderContext::new("demo").with_variable("AUTHOR", "Alice");
        assert_eq!(ctx.get("AUTHOR"), Some("Alice"));
        assert_eq!(ctx.render("by {{AUTHOR}}"), "by Alice");
    }

    #[test]
    fn unknown_placeholder_is_left_verbatim() {
        let ctx = RenderContext::new("demo");
        assert_eq!(ctx.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn project_name_rules() {
        assert!(DomainValidator::validate_project_name("ml_project").is_ok());
        assert!(DomainValidator::validate_project_name("demo-2").is_ok());
        assert!(DomainValidator::validate_project_name("").is_err());
        assert!(DomainValidator::validate_project_name(".hidden").is_err());
        assert!(DomainValidator::validate_project_name("a/b").is_err());
        assert!(DomainValidator::validate_project_name("..").is_err());
    }
}
