//! The built-in ML project blueprint.
//!
//! [`MlBlueprint`] implements the `BlueprintSource` port: given a render
//! context it assembles the fixed directory tree and file manifest of a
//! standard machine-learning project. The tree and manifest are hand-authored
//! here; the file contents live in [`payloads`].

pub mod payloads;

use std::path::Path;

use tracing::{debug, instrument};

use mlforge_core::{
    application::ports::BlueprintSource,
    domain::{DirectoryTree, FileManifest, PayloadContent, ProjectLayout, RenderContext},
    error::{MlforgeError, MlforgeResult},
};

/// The fixed ML project skeleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct MlBlueprint;

impl MlBlueprint {
    pub fn new() -> Self {
        Self
    }
}

impl BlueprintSource for MlBlueprint {
    #[instrument(skip_all, fields(project = %ctx.project_name()))]
    fn layout(&self, ctx: &RenderContext) -> MlforgeResult<ProjectLayout> {
        let root = ctx.project_name();
        let tree = directory_tree(root);

        let mut manifest = FileManifest::new();
        for (rel_path, payload) in manifest_entries() {
            let path = Path::new(root).join(rel_path);
            manifest
                .insert(path, payload.realize(ctx))
                .map_err(MlforgeError::Domain)?;
        }

        debug!(
            directories = tree.node_count(),
            files = manifest.len(),
            "blueprint assembled"
        );

        Ok(ProjectLayout::new(tree, manifest))
    }
}

/// The directory skeleton, rooted at the project name.
fn directory_tree(root: &str) -> DirectoryTree {
    DirectoryTree::new(root)
        .with_child(
            DirectoryTree::new("data")
                .with_child(DirectoryTree::new("raw"))
                .with_child(DirectoryTree::new("processed"))
                .with_child(DirectoryTree::new("interim"))
                .with_child(DirectoryTree::new("external")),
        )
        .with_child(DirectoryTree::new("notebooks"))
        .with_child(
            DirectoryTree::new("src")
                .with_child(DirectoryTree::new("data"))
                .with_child(DirectoryTree::new("features"))
                .with_child(DirectoryTree::new("models"))
                .with_child(DirectoryTree::new("visualization"))
                .with_child(DirectoryTree::new("utils")),
        )
        .with_child(DirectoryTree::new("models"))
        .with_child(DirectoryTree::new("reports").with_child(DirectoryTree::new("figures")))
        .with_child(DirectoryTree::new("tests"))
        .with_child(DirectoryTree::new("config"))
        .with_child(DirectoryTree::new("docs"))
}

/// The file manifest, as (path under the project root, payload) pairs.
///
/// Order is the write order; keep project-level files first so a partially
/// interrupted run still leaves a recognizable project.
fn manifest_entries() -> Vec<(&'static str, PayloadContent)> {
    vec![
        ("README.md", payloads::project::readme()),
        ("requirements.txt", payloads::project::requirements()),
        ("setup.py", payloads::project::setup_py()),
        (".gitignore", payloads::project::gitignore()),
        ("config/config.yaml", payloads::project::config_yaml()),
        ("config/__init__.py", payloads::empty()),
        ("src/__init__.py", payloads::empty()),
        ("src/data/__init__.py", payloads::empty()),
        ("src/data/load_data.py", payloads::python::load_data()),
        ("src/data/preprocess.py", payloads::python::preprocess()),
        ("src/features/__init__.py", payloads::empty()),
        (
            "src/features/build_features.py",
            payloads::python::build_features(),
        ),
        ("src/models/__init__.py", payloads::empty()),
        ("src/models/train.py", payloads::python::train()),
        ("src/models/predict.py", payloads::python::predict()),
        ("src/models/evaluate.py", payloads::python::evaluate()),
        ("src/visualization/__init__.py", payloads::empty()),
        (
            "src/visualization/visualize.py",
            payloads::python::visualize(),
        ),
        ("src/utils/__init__.py", payloads::empty()),
        ("src/utils/helpers.py", payloads::python::helpers()),
        ("tests/__init__.py", payloads::empty()),
        ("tests/test_data.py", payloads::python::test_data()),
        ("tests/test_models.py", payloads::python::test_models()),
        ("notebooks/01_exploration.ipynb", payloads::empty()),
        ("notebooks/02_preprocessing.ipynb", payloads::empty()),
        ("notebooks/03_modeling.ipynb", payloads::empty()),
        ("reports/results.md", payloads::docs::results()),
        ("docs/project_overview.md", payloads::docs::project_overview()),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
