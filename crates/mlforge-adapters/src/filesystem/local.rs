//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mlforge_core::{application::ports::Filesystem, error::MlforgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MlforgeResult<()> {
        // std::fs::create_dir_all also fails on a file collision, but the OS
        // message ("File exists") is unhelpful. Name the problem explicitly.
        if path.exists() && !path.is_dir() {
            return Err(collision_error(path));
        }
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MlforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn collision_error(path: &Path) -> mlforge_core::error::MlforgeError {
    use mlforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "path exists but is not a directory".into(),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mlforge_core::error::MlforgeError {
    use mlforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
