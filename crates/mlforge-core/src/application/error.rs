//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. The path is the one that triggered the
    /// failure; the reason carries the underlying OS error text.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The blueprint could not produce a layout.
    #[error("blueprint failed: {reason}")]
    BlueprintFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that no regular file sits where a directory is needed".into(),
                "Check available disk space".into(),
            ],
            Self::BlueprintFailed { reason } => vec![
                format!("Layout generation failed: {reason}"),
                "This is likely a bug, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::BlueprintFailed { .. } => ErrorCategory::Internal,
        }
    }
}
