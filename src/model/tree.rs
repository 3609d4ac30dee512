//! Folder Tree Model
//!
//! The materialized folder tree, which folders are expanded, and the
//! request bookkeeping for the tree loader.

use std::collections::BTreeSet;

use super::types::FolderNode;
use crate::cache::RequestSequence;
use crate::logic::path::ancestors;
use crate::logic::tree;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderTreeModel {
    /// Root of the displayed tree; `None` until the first load
    pub root: Option<FolderNode>,

    /// Paths of expanded folders
    pub expanded: BTreeSet<String>,

    /// Sequence of full tree loads
    pub sequence: RequestSequence,

    /// A full tree load is in flight
    pub loading: bool,

    /// Folders with a depth-1 load in flight
    pub expanding: BTreeSet<String>,
}

impl FolderTreeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(&self, path: &str) -> Option<&FolderNode> {
        self.root.as_ref().and_then(|root| tree::find(root, path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.folder(path).is_some()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Expand every ancestor of `path` so it is visible
    pub fn reveal(&mut self, path: &str) {
        for ancestor in ancestors(path) {
            self.expanded.insert(ancestor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_expands_ancestors_only() {
        let mut model = FolderTreeModel::new();
        model.reveal("/home/admin/reports");
        assert!(model.is_expanded("/"));
        assert!(model.is_expanded("/home"));
        assert!(model.is_expanded("/home/admin"));
        assert!(!model.is_expanded("/home/admin/reports"));
    }

    #[test]
    fn test_empty_tree_has_no_folders() {
        let model = FolderTreeModel::new();
        assert!(!model.contains("/"));
    }
}
