//! Selection Model
//!
//! Tracks the active folder and file, the kind of the last click, and the
//! multi-select set. Ctrl/Meta clicks accumulate into the multi-select
//! set; a shift click recomputes the lasso (the contiguous run from the
//! anchor), which is folded into the multi-select set on the next ctrl
//! click and discarded on the next plain click.
//!
//! Every mutator returns whether observers must be notified. A click
//! always notifies because it carries a fresh stamp.

use super::types::{ClickKind, ClickTag, Modifiers, RepoNode, SelectionSnapshot};
use crate::logic::selection::{lasso_range, merge_unique, push_unique, toggle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    last_click: ClickKind,
    folder: Option<ClickTag>,
    file: Option<ClickTag>,
    /// Id of the last file clicked without shift
    anchor: Option<String>,
    multi_select: Vec<RepoNode>,
    shift_lasso: Vec<RepoNode>,
    clock: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_stamp(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    pub fn last_click_kind(&self) -> ClickKind {
        self.last_click
    }

    pub fn active_folder(&self) -> Option<&RepoNode> {
        self.folder.as_ref().map(|t| &t.node)
    }

    pub fn active_file(&self) -> Option<&RepoNode> {
        self.file.as_ref().map(|t| &t.node)
    }

    pub fn folder_tag(&self) -> Option<&ClickTag> {
        self.folder.as_ref()
    }

    pub fn file_tag(&self) -> Option<&ClickTag> {
        self.file.as_ref()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn multi_select(&self) -> &[RepoNode] {
        &self.multi_select
    }

    pub fn shift_lasso(&self) -> &[RepoNode] {
        &self.shift_lasso
    }

    /// Effective selection: the multi-select set plus the current lasso
    pub fn selected_files(&self) -> Vec<RepoNode> {
        let mut all = self.multi_select.clone();
        merge_unique(&mut all, &self.shift_lasso);
        all
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.multi_select.iter().any(|n| n.id == id) || self.shift_lasso.iter().any(|n| n.id == id)
    }

    pub fn in_trash(&self) -> bool {
        self.active_folder().map(|f| f.is_trash()).unwrap_or(false)
    }

    /// Make `node` the active folder. Drops the file selection, which
    /// belonged to the previous folder.
    pub fn select_folder(&mut self, node: RepoNode) -> bool {
        let before = self.clone();

        self.last_click = if node.is_trash() {
            ClickKind::Trash
        } else {
            ClickKind::Folder
        };
        let stamp = self.next_stamp();
        self.folder = Some(ClickTag { node, stamp });
        self.file = None;
        self.anchor = None;
        self.multi_select.clear();
        self.shift_lasso.clear();

        *self != before
    }

    /// Click on a file. `display_order` holds the file nodes of the current
    /// listing in the order they are shown; it bounds shift ranges.
    pub fn select_file(&mut self, node: RepoNode, modifiers: Modifiers, display_order: &[RepoNode]) -> bool {
        let before = self.clone();

        // Without an anchor there is nothing to extend from
        let shift = modifiers.shift && !modifiers.toggles() && self.anchor.is_some();

        self.last_click = if self.in_trash() {
            ClickKind::TrashItem
        } else {
            ClickKind::File
        };

        if modifiers.toggles() {
            let lasso = std::mem::take(&mut self.shift_lasso);
            merge_unique(&mut self.multi_select, &lasso);
            toggle(&mut self.multi_select, &node);
        } else if shift {
            let anchor = self.anchor.clone().unwrap_or_default();
            self.shift_lasso = lasso_range(display_order, &anchor, &node.id);
            if self.shift_lasso.is_empty() {
                push_unique(&mut self.shift_lasso, &node);
            }
        } else {
            self.multi_select = vec![node.clone()];
            self.shift_lasso.clear();
        }

        if !shift {
            self.anchor = Some(node.id.clone());
        }

        let stamp = self.next_stamp();
        self.file = Some(ClickTag { node, stamp });

        *self != before
    }

    /// Click on the empty area of the file list
    pub fn click_body(&mut self) -> bool {
        let before = self.clone();

        self.multi_select.clear();
        self.shift_lasso.clear();
        self.anchor = None;
        match self.last_click {
            ClickKind::File => {
                self.last_click = ClickKind::Folder;
                self.file = None;
            }
            ClickKind::TrashItem => {
                self.last_click = ClickKind::Trash;
                self.file = None;
            }
            _ => {}
        }

        *self != before
    }

    /// Re-stamp the active file so observers re-run for an unchanged target
    pub fn touch_file(&mut self) -> bool {
        let stamp = self.next_stamp();
        match self.file.as_mut() {
            Some(tag) => {
                tag.stamp = stamp;
                true
            }
            None => false,
        }
    }

    /// The active file vanished from its listing; fall back to the folder
    pub fn drop_file(&mut self) -> bool {
        let before = self.clone();
        self.file = None;
        self.multi_select.clear();
        self.shift_lasso.clear();
        self.anchor = None;
        self.last_click = if self.in_trash() {
            ClickKind::Trash
        } else {
            ClickKind::Folder
        };
        *self != before
    }

    /// Remove selected nodes that are no longer listed
    pub fn retain_listed(&mut self, listed: &[RepoNode]) -> bool {
        let before = self.clone();
        let present = |n: &RepoNode| listed.iter().any(|l| l.id == n.id);
        self.multi_select.retain(present);
        self.shift_lasso.retain(present);
        *self != before
    }

    pub fn clear(&mut self) -> bool {
        let before = self.clone();
        let clock = self.clock;
        *self = Self::default();
        self.clock = clock;
        *self != before
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            folder_path: self.active_folder().map(|n| n.path.clone()),
            file_id: self.active_file().map(|n| n.id.clone()),
            file_path: self.active_file().map(|n| n.path.clone()),
            last_click: self.last_click,
        }
    }
}
