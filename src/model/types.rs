//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use crate::api::RepositoryFileDto;
use crate::logic::path::is_trash;

/// A folder or file in the repository
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoNode {
    pub id: String,
    pub path: String,
    pub title: String,
    pub name: String,
    pub folder: bool,
    pub hidden: bool,
    pub description: String,
}

impl RepoNode {
    /// Title shown to the user; falls back to the raw name
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }

    pub fn is_trash(&self) -> bool {
        is_trash(&self.path)
    }
}

impl From<&RepositoryFileDto> for RepoNode {
    fn from(dto: &RepositoryFileDto) -> Self {
        Self {
            id: dto.id.clone(),
            path: dto.path.clone(),
            title: dto.title.clone(),
            name: dto.name.clone(),
            folder: dto.folder,
            hidden: dto.hidden,
            description: dto.description.clone(),
        }
    }
}

/// A folder with its materialized subfolders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderNode {
    pub node: RepoNode,
    pub children: Vec<FolderNode>,
    /// Whether `children` reflects the server. A folder fetched at the
    /// depth limit comes back without children and is loaded on expand.
    pub children_loaded: bool,
}

/// One row of a file listing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingEntry {
    pub node: RepoNode,
    /// Entry comes from the deleted-items listing
    pub trash: bool,
    /// Where a deleted item used to live, prefixed with the origin label
    pub provenance: Option<String>,
    pub deleted_date: Option<String>,
}

/// Reformatted response of a file listing request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ListingEntry> {
        self.entries.iter().find(|e| e.node.id == id)
    }

    pub fn find_by_path(&self, path: &str) -> Option<&ListingEntry> {
        self.entries.iter().find(|e| e.node.path == path)
    }

    /// Clickable nodes in display order. Deleted folders show up in the
    /// trash listing and are selected like files.
    pub fn display_order(&self) -> Vec<RepoNode> {
        self.entries.iter().map(|e| e.node.clone()).collect()
    }

    /// Ids of every entry, used as the purge list for the trash
    pub fn ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.node.id.is_empty())
            .map(|e| e.node.id.clone())
            .collect()
    }
}

/// Kind of the most recent interaction; exactly one is current
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClickKind {
    #[default]
    Folder,
    File,
    Trash,
    TrashItem,
}

/// A click target tagged with the click that produced it. Two clicks on
/// the same target carry different stamps, so re-clicking re-notifies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickTag {
    pub node: RepoNode,
    pub stamp: u64,
}

/// Modifier keys held during a file click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl and Meta (Cmd) behave the same
    pub fn toggles(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Selection carried across a redraw
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub folder_path: Option<String>,
    pub file_id: Option<String>,
    pub file_path: Option<String>,
    pub last_click: ClickKind,
}
