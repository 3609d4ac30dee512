//! Message types for the Elm Architecture pattern
//!
//! `Msg` is everything that can happen to the browser; `Effect` is
//! everything the browser asks the runtime to do. Messages flow into
//! `update`, which returns the new model and the effects to run.
//!
//! Message sources:
//! - User input (mapped by the keyboard handler)
//! - Repository responses (from the request worker)
//! - Host events (repository dirty, favorites changed)

use crate::api::{RepositoryFileListDto, RepositoryFileTreeDto};
use crate::cache::RequestTicket;
use crate::logic::actions::{ActionId, ActionTarget};
use crate::model::{Modifiers, PermissionAnswer, PermissionQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // ============================================
    // USER INPUT
    // ============================================
    /// Reload the tree, carrying the selection over. `initial_path`
    /// overrides the folder to start in.
    Redraw { initial_path: Option<String> },

    /// Folder clicked in the tree
    ClickFolder { path: String },

    /// File clicked in the listing
    ClickFile { id: String, modifiers: Modifiers },

    /// Listing background clicked
    ClickBody,

    /// File double-clicked
    OpenFile { id: String },

    ToggleFolder { path: String },
    ExpandFolder { path: String },
    CollapseFolder { path: String },

    /// Refresh button: reload everything and tell the host
    Refresh,

    SetShowDescriptions(bool),
    SetShowHidden(bool),

    ActivateAction { id: ActionId },

    // ============================================
    // REPOSITORY RESPONSES
    // ============================================
    TreeLoaded {
        seq: u64,
        result: Result<RepositoryFileTreeDto, String>,
    },

    /// Depth-1 load for a folder being expanded
    SubtreeLoaded {
        path: String,
        result: Result<RepositoryFileTreeDto, String>,
    },

    ListingLoaded {
        ticket: RequestTicket,
        path: String,
        result: Result<RepositoryFileListDto, String>,
    },

    PermissionLoaded {
        query: PermissionQuery,
        path: String,
        result: Result<PermissionAnswer, String>,
    },

    ShowHiddenSettingLoaded { result: Result<bool, String> },

    /// A repository-changing action finished
    ActionFinished {
        action: ActionId,
        result: Result<(), String>,
    },

    // ============================================
    // HOST EVENTS
    // ============================================
    /// The repository changed elsewhere
    MarkCacheDirty,

    /// Favorites changed; observers re-run for the current selection
    FavoritesChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Run,
    NewWindow,
    Background,
    Download,
}

/// Events the browser sends to the rest of the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    RefreshBrowsePerspective { show_descriptions: bool },
    FavoritesChanged,
    RepositoryDirty,
}

/// Which observers need to re-run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Tree,
    Listing,
    Selection,
    Actions,
    View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTree {
        seq: u64,
        path: String,
        depth: u32,
        show_hidden: bool,
    },

    /// Depth-1 load of one folder
    FetchSubtree { path: String, show_hidden: bool },

    FetchListing {
        ticket: RequestTicket,
        path: String,
        show_hidden: bool,
    },

    CheckPermission { query: PermissionQuery, path: String },

    FetchShowHiddenSetting,

    OpenFile { path: String, mode: OpenMode },

    FireHostEvent(HostEvent),

    InvokeAction { action: ActionId, target: ActionTarget },

    Changed(ChangeKind),
}
