//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the project name
//! 2. Ask the blueprint for the project layout
//! 3. Create every directory in the tree
//! 4. Write every manifest file
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//!
//! ## Write semantics
//!
//! The whole run is a single linear pass with idempotent operations:
//! pre-existing directories are tolerated and existing files are overwritten
//! in full. There is no pre-existence check on the project root and no
//! rollback on failure — an interrupted run leaves a partial tree that the
//! next run repairs, because every write is a deterministic overwrite.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{BlueprintSource, Filesystem},
    domain::{DomainValidator as validator, ProjectLayout, RenderContext},
    error::{MlforgeError, MlforgeResult},
};

/// Summary of a completed scaffold run, for operator-facing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// The generated project's root directory.
    pub project_root: PathBuf,
    /// Number of directories created (or confirmed present).
    pub directories_created: usize,
    /// Number of files written.
    pub files_written: usize,
}

/// Main scaffolding service.
///
/// Orchestrates layout generation and the two filesystem phases.
pub struct ScaffoldService {
    blueprint: Box<dyn BlueprintSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(blueprint: Box<dyn BlueprintSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            blueprint,
            filesystem,
        }
    }

    /// Scaffold a new project under `base_dir`.
    ///
    /// This is the main use case - materializes the fixed project skeleton
    /// with the given name. `base_dir` is the directory the project root is
    /// created in (usually the current working directory).
    #[instrument(
        skip_all,
        fields(
            project = %project_name.as_ref(),
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        project_name: impl AsRef<str>,
        base_dir: impl AsRef<Path>,
    ) -> MlforgeResult<ScaffoldReport> {
        let project_name = project_name.as_ref();
        let base_dir = base_dir.as_ref();

        // 1. Validate the name before touching the filesystem
        validator::validate_project_name(project_name).map_err(MlforgeError::Domain)?;

        // 2. Build the layout
        let ctx = RenderContext::new(project_name);
        let layout = self.blueprint.layout(&ctx)?;
        validator::validate_layout(&layout).map_err(MlforgeError::Domain)?;

        info!(
            directories = layout.tree().node_count(),
            files = layout.manifest().len(),
            "Layout generated"
        );

        // 3 + 4. Materialize
        let report = self.write_layout(&layout, base_dir)?;

        info!("Scaffold completed successfully");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write a validated layout to the filesystem.
    ///
    /// Directories first (parents before children, as `flatten` guarantees),
    /// then files. Each file's parent is created defensively: manifest paths
    /// may sit at arbitrary depth and must not rely on the tree having
    /// covered every intermediate directory.
    fn write_layout(&self, layout: &ProjectLayout, base_dir: &Path) -> MlforgeResult<ScaffoldReport> {
        let directories = layout.tree().flatten();
        for dir in &directories {
            let path = base_dir.join(dir.as_path());
            debug!(path = %path.display(), "creating directory");
            self.filesystem.create_dir_all(&path)?;
        }

        for entry in layout.manifest().iter() {
            let path = base_dir.join(entry.path.as_path());

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            debug!(path = %path.display(), bytes = entry.size(), "writing file");
            self.filesystem.write_file(&path, &entry.content)?;
        }

        Ok(ScaffoldReport {
            project_root: base_dir.join(layout.root_name()),
            directories_created: directories.len(),
            files_written: layout.manifest().len(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
