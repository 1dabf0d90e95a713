use crate::domain::{entities::layout::ProjectLayout, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that a project name is a legal single directory name.
    ///
    /// The name becomes the root directory of the generated tree, so the
    /// rules are the filesystem's: non-empty, no separators, no NUL, not a
    /// dot-component, and not hidden (leading '.').
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.contains('\0') {
            Some("name cannot contain NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: reason.into(),
            }),
            None => Ok(()),
        }
    }

    pub fn validate_layout(layout: &ProjectLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
