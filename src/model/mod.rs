//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state of the browser.
//! The Model is organized into focused sub-models:
//!
//! - **FolderTreeModel**: materialized folder tree, expansion, tree loads
//! - **FileListModel**: displayed listing, listing cache, listing loads
//! - **SelectionState**: active folder/file, last click, multi-select
//! - **PermissionFlags**: async permission answers for the selection
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the runtime
//! - Everything the host used to provide globally lives in `BrowserContext`

pub mod files;
pub mod permissions;
pub mod selection;
pub mod tree;
pub mod types;

use std::sync::Arc;

pub use files::FileListModel;
pub use permissions::{Capabilities, PermissionAnswer, PermissionFlags, PermissionQuery};
pub use selection::SelectionState;
pub use tree::FolderTreeModel;
pub use types::*;

use crate::logic::sorting::{NaturalCollator, TitleCollator};

/// Settings the browser is constructed with
#[derive(Clone, Debug)]
pub struct BrowserContext {
    /// Folder selected when nothing else is
    pub home_folder: String,

    /// Depth of the initial tree request
    pub tree_depth: u32,

    pub show_hidden: bool,

    /// Tooltips show descriptions instead of raw names
    pub show_descriptions: bool,

    pub capabilities: Capabilities,

    pub collator: Arc<dyn TitleCollator>,

    /// Title of the trash pseudo-folder
    pub trash_label: String,

    /// Prefix of a deleted item's provenance
    pub origin_label: String,
}

impl Default for BrowserContext {
    fn default() -> Self {
        Self {
            home_folder: "/".to_string(),
            tree_depth: 3,
            show_hidden: false,
            show_descriptions: true,
            capabilities: Capabilities::default(),
            collator: Arc::new(NaturalCollator),
            trash_label: "Trash".to_string(),
            origin_label: "Origin:".to_string(),
        }
    }
}

/// Root browser model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub context: BrowserContext,

    pub tree: FolderTreeModel,

    pub files: FileListModel,

    pub selection: SelectionState,

    pub permissions: PermissionFlags,

    /// Selection to restore once the reloaded tree (and listing) arrive
    pub pending_restore: Option<SelectionSnapshot>,

    /// Folder requested by `Redraw { initial_path }`
    pub start_folder: Option<String>,

    /// Last transport failure, for display. Never clears data.
    pub last_error: Option<String>,
}

impl Model {
    pub fn new(context: BrowserContext) -> Self {
        Self {
            context,
            tree: FolderTreeModel::new(),
            files: FileListModel::new(),
            selection: SelectionState::new(),
            permissions: PermissionFlags::new(),
            pending_restore: None,
            start_folder: None,
            last_error: None,
        }
    }

    pub fn active_folder_path(&self) -> Option<&str> {
        self.selection.active_folder().map(|n| n.path.as_str())
    }

    /// Listing on screen for the active folder
    pub fn active_listing(&self) -> Option<&Listing> {
        self.active_folder_path().and_then(|path| self.files.listing_for(path))
    }

    pub fn is_loading(&self) -> bool {
        self.tree.loading || self.files.loading || !self.tree.expanding.is_empty()
    }

    pub fn is_home_folder(&self, path: &str) -> bool {
        path.trim_end_matches('/') == self.context.home_folder.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(BrowserContext::default());
        assert!(model.tree.root.is_none());
        assert!(model.selection.active_folder().is_none());
        assert!(model.last_error.is_none());
        assert!(!model.is_loading());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(BrowserContext::default());
        let _cloned = model.clone();
    }

    #[test]
    fn test_is_home_folder_ignores_trailing_slash() {
        let context = BrowserContext {
            home_folder: "/home/admin/".to_string(),
            ..Default::default()
        };
        let model = Model::new(context);
        assert!(model.is_home_folder("/home/admin"));
        assert!(!model.is_home_folder("/home"));
    }
}
