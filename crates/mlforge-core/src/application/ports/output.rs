//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mlforge-adapters` crate provides implementations.

use crate::domain::{ProjectLayout, RenderContext};
use crate::error::MlforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mlforge_adapters::filesystem::LocalFilesystem` (production)
/// - `mlforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent: pre-existing directories are not errors.
/// - A path occupied by a regular file where a directory is needed IS an
///   error (name collision), surfaced with the offending path.
/// - `write_file` fully overwrites; there is no merge or backup.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MlforgeResult<()>;

    /// Write UTF-8 content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> MlforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for project layout generation.
///
/// Implemented by:
/// - `mlforge_adapters::blueprint::MlBlueprint` (the built-in ML skeleton)
///
/// Implementations must be pure: same context in, same layout out, no side
/// effects.
#[cfg_attr(test, mockall::automock)]
pub trait BlueprintSource: Send + Sync {
    /// Produce the complete project layout for the given context.
    fn layout(&self, ctx: &RenderContext) -> MlforgeResult<ProjectLayout>;
}
