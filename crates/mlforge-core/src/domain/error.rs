use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap, string-carrying)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid directory name '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },

    #[error("duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("project layout is empty")]
    EmptyLayout,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{name}' is invalid: {reason}"),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: ml_project, churn-model, experiment01".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The path '{path}' appears twice in the file manifest"),
                "This is a bug in the blueprint, please report it".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' is absolute; layouts must stay relative"),
                "This is a bug in the blueprint, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidSegment { .. } => {
                ErrorCategory::Validation
            }
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyLayout => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
