use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// A hand-authored tree of directories to create.
///
/// Each node is one directory name plus its children. The structure is a
/// literal tree (no cycles possible) and is fully determined at invocation
/// time from the project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTree {
    name: String,
    children: Vec<DirectoryTree>,
}

impl DirectoryTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: DirectoryTree) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total node count, including this node.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Produce the relative path of every node, parents before children.
    ///
    /// Depth-first traversal; each node appears exactly once. Directory
    /// creation is commutative and idempotent, so callers only rely on the
    /// parents-first property, not on sibling order.
    pub fn flatten(&self) -> Vec<RelativePath> {
        let mut out = Vec::with_capacity(self.node_count());
        self.collect_into(RelativePath::new(""), &mut out);
        out
    }

    fn collect_into(&self, prefix: RelativePath, out: &mut Vec<RelativePath>) {
        // join() cannot fail here: node names are validated to be plain
        // segments, never absolute.
        let own = prefix
            .join(&self.name)
            .expect("directory name is a relative segment");
        out.push(own.clone());
        for child in &self.children {
            child.collect_into(own.clone(), out);
        }
    }

    /// Check every node name is a legal single path segment.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_segment(&self.name)?;
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

fn validate_segment(segment: &str) -> Result<(), DomainError> {
    let reason = if segment.is_empty() {
        Some("name cannot be empty")
    } else if segment == "." || segment == ".." {
        Some("name cannot be a relative path component")
    } else if segment.contains('/') || segment.contains('\\') {
        Some("name cannot contain path separators")
    } else if segment.contains('\0') {
        Some("name cannot contain NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidSegment {
            segment: segment.into(),
            reason: reason.into(),
        }),
        None => Ok(()),
    }
}

/// One file to write: a relative path and its final text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: RelativePath,
    pub content: String,
}

impl FileEntry {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// An ordered set of (relative path, content) pairs with unique keys.
///
/// Order is preserved so that writes happen in a stable, reviewable sequence;
/// uniqueness is enforced at insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileManifest {
    entries: Vec<FileEntry>,
    seen: HashSet<String>,
}

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting duplicate and absolute paths.
    pub fn insert(
        &mut self,
        path: impl Into<std::path::PathBuf>,
        content: String,
    ) -> Result<(), DomainError> {
        let path = RelativePath::try_new(path)?;
        let key = path.to_string();
        if !self.seen.insert(key.clone()) {
            return Err(DomainError::DuplicatePath { path: key });
        }
        self.entries.push(FileEntry { path, content });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry's content by its exact path (testing helper).
    pub fn content_of(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.path.to_string() == path)
            .map(|e| e.content.as_str())
    }
}

/// Final project layout ready for materialization.
///
/// This is the output of the blueprint. It contains no business logic, only
/// data: the directory tree rooted at the project name, and the manifest of
/// files to write beneath it.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    tree: DirectoryTree,
    manifest: FileManifest,
}

impl ProjectLayout {
    pub fn new(tree: DirectoryTree, manifest: FileManifest) -> Self {
        Self { tree, manifest }
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    pub fn manifest(&self) -> &FileManifest {
        &self.manifest
    }

    pub fn root_name(&self) -> &str {
        self.tree.name()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tree.name().is_empty() {
            return Err(DomainError::EmptyLayout);
        }
        self.tree.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_count_counts_all_nodes() {
        let tree = DirectoryTree::new("a")
            .with_child(DirectoryTree::new("b").with_child(DirectoryTree::new("c")))
            .with_child(DirectoryTree::new("d"));
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn validate_rejects_separator_in_node_name() {
        let tree = DirectoryTree::new("a").with_child(DirectoryTree::new("b/c"));
        assert!(matches!(
            tree.validate(),
            Err(DomainError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn validate_rejects_dot_dot() {
        assert!(DirectoryTree::new("..").validate().is_err());
    }

    #[test]
    fn manifest_rejects_absolute_path() {
        let mut manifest = FileManifest::new();
        assert!(matches!(
            manifest.insert("/etc/passwd", "x".into()),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn manifest_content_lookup() {
        let mut manifest = FileManifest::new();
        manifest.insert("demo/a.txt", "hello".into()).unwrap();
        assert_eq!(manifest.content_of("demo/a.txt"), Some("hello"));
        assert_eq!(manifest.content_of("demo/b.txt"), None);
    }

    #[test]
    fn empty_entry_helpers() {
        let entry = FileEntry {
            path: RelativePath::new("demo/notebooks/01_exploration.ipynb"),
            content: String::new(),
        };
        assert!(entry.is_empty());
        assert_eq!(entry.size(), 0);
    }
}
