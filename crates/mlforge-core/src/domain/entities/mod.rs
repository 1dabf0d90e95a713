pub mod common;
pub mod layout;
pub mod payload;

pub use crate::domain::DomainError;
pub use layout::{DirectoryTree, FileManifest, ProjectLayout};
pub use payload::RenderContext;
