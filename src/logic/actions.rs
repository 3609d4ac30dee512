//! Action/button presenter
//!
//! A pure function of the selection and the permission flags that picks
//! the action set to show and decides which buttons are enabled. Pending
//! permission queries count as denied, so buttons only ever go from
//! disabled to enabled as answers arrive.

use crate::model::{Capabilities, ClickKind, Model, PermissionFlags, RepoNode, SelectionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionId {
    // Folder
    NewFolder,
    Upload,
    DownloadFolder,
    DeleteFolder,
    RenameFolder,
    FolderProperties,
    // File
    Open,
    OpenInNewWindow,
    RunInBackground,
    Edit,
    DownloadFile,
    DeleteFile,
    RenameFile,
    FileProperties,
    // Multi-select
    Cut,
    Copy,
    DeleteSelected,
    // Trash
    EmptyTrash,
    PermanentDelete,
    Restore,
}

impl ActionId {
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::NewFolder => "New Folder...",
            ActionId::Upload => "Upload...",
            ActionId::DownloadFolder | ActionId::DownloadFile => "Download...",
            ActionId::DeleteFolder | ActionId::DeleteFile | ActionId::DeleteSelected => "Move to Trash",
            ActionId::RenameFolder | ActionId::RenameFile => "Rename...",
            ActionId::FolderProperties | ActionId::FileProperties => "Properties...",
            ActionId::Open => "Open",
            ActionId::OpenInNewWindow => "Open in a new window",
            ActionId::RunInBackground => "Run in background...",
            ActionId::Edit => "Edit",
            ActionId::Cut => "Cut",
            ActionId::Copy => "Copy",
            ActionId::EmptyTrash => "Empty Trash",
            ActionId::PermanentDelete => "Delete Permanently",
            ActionId::Restore => "Restore",
        }
    }

    /// Actions that only remove or restore items
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            ActionId::DeleteFolder
                | ActionId::DeleteFile
                | ActionId::DeleteSelected
                | ActionId::EmptyTrash
                | ActionId::PermanentDelete
        )
    }
}

/// What an action operates on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionTarget {
    Folder(RepoNode),
    File(RepoNode),
    /// Multi-select: every selected node
    Files(Vec<RepoNode>),
    /// Ids of deleted items (trash actions)
    DeletedItems(Vec<String>),
}

impl ActionTarget {
    /// Repository ids the target covers
    pub fn ids(&self) -> Vec<String> {
        match self {
            ActionTarget::Folder(node) | ActionTarget::File(node) => vec![node.id.clone()],
            ActionTarget::Files(nodes) => nodes.iter().map(|n| n.id.clone()).collect(),
            ActionTarget::DeletedItems(ids) => ids.clone(),
        }
    }
}

/// Which group of buttons is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSetKind {
    Folder,
    File,
    MultiSelect,
    Trash,
    TrashItem,
}

impl ActionSetKind {
    /// Header shown above the buttons
    pub fn header(&self) -> &'static str {
        match self {
            ActionSetKind::Folder => "Folder Actions",
            ActionSetKind::File | ActionSetKind::MultiSelect => "File Actions",
            ActionSetKind::Trash | ActionSetKind::TrashItem => "Trash Actions",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub id: ActionId,
    pub label: &'static str,
    pub enabled: bool,
    pub target: ActionTarget,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSet {
    pub kind: ActionSetKind,
    pub buttons: Vec<ActionButton>,
}

impl ActionSet {
    pub fn button(&self, id: ActionId) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    pub fn is_enabled(&self, id: ActionId) -> bool {
        self.button(id).map(|b| b.enabled).unwrap_or(false)
    }
}

/// Everything the presenter looks at
#[derive(Clone, Copy, Debug)]
pub struct ActionContext<'a> {
    pub selection: &'a SelectionState,
    pub permissions: &'a PermissionFlags,
    pub capabilities: Capabilities,
    /// The active folder is the user's home folder
    pub at_home: bool,
    pub deleted_ids: &'a [String],
}

impl<'a> ActionContext<'a> {
    pub fn from_model(model: &'a Model) -> Self {
        Self {
            selection: &model.selection,
            permissions: &model.permissions,
            capabilities: model.context.capabilities,
            at_home: model.active_folder_path().is_some_and(|path| model.is_home_folder(path)),
            deleted_ids: &model.files.deleted_ids,
        }
    }
}

fn button(id: ActionId, enabled: bool, target: &ActionTarget) -> ActionButton {
    ActionButton {
        id,
        label: id.label(),
        enabled,
        target: target.clone(),
    }
}

/// Pick the action set for the current selection. `None` until a folder
/// has been selected.
pub fn present_actions(ctx: &ActionContext) -> Option<ActionSet> {
    let selection = ctx.selection;
    let flags = ctx.permissions;
    let folder = selection.active_folder()?;

    match selection.last_click_kind() {
        ClickKind::Trash => {
            let target = ActionTarget::DeletedItems(ctx.deleted_ids.to_vec());
            Some(ActionSet {
                kind: ActionSetKind::Trash,
                buttons: vec![button(ActionId::EmptyTrash, !ctx.deleted_ids.is_empty(), &target)],
            })
        }
        ClickKind::TrashItem => {
            let ids: Vec<String> = selection.selected_files().into_iter().map(|n| n.id).collect();
            let enabled = !ids.is_empty();
            let target = ActionTarget::DeletedItems(ids);
            Some(ActionSet {
                kind: ActionSetKind::TrashItem,
                buttons: vec![
                    button(ActionId::PermanentDelete, enabled, &target),
                    button(ActionId::Restore, enabled, &target),
                ],
            })
        }
        ClickKind::File if selection.selected_files().len() > 1 => {
            let target = ActionTarget::Files(selection.selected_files());
            Some(ActionSet {
                kind: ActionSetKind::MultiSelect,
                buttons: vec![
                    button(ActionId::Cut, flags.file_delete(), &target),
                    button(ActionId::Copy, true, &target),
                    button(ActionId::DeleteSelected, flags.file_delete(), &target),
                ],
            })
        }
        ClickKind::File => {
            let file = selection.active_file()?;
            let target = ActionTarget::File(file.clone());
            let read = ctx.capabilities.can_read;
            Some(ActionSet {
                kind: ActionSetKind::File,
                buttons: vec![
                    button(ActionId::Open, read, &target),
                    button(ActionId::OpenInNewWindow, read, &target),
                    button(ActionId::RunInBackground, read, &target),
                    button(ActionId::Edit, flags.file_write(), &target),
                    button(ActionId::DownloadFile, ctx.capabilities.can_download, &target),
                    button(ActionId::DeleteFile, flags.file_delete(), &target),
                    button(ActionId::RenameFile, flags.file_write(), &target),
                    button(ActionId::FileProperties, read, &target),
                ],
            })
        }
        ClickKind::Folder => {
            let target = ActionTarget::Folder(folder.clone());
            let write = flags.folder_write();
            Some(ActionSet {
                kind: ActionSetKind::Folder,
                buttons: vec![
                    button(ActionId::NewFolder, write && ctx.capabilities.can_create, &target),
                    button(ActionId::Upload, flags.folder_upload() && ctx.capabilities.can_publish, &target),
                    button(ActionId::DownloadFolder, flags.folder_download(), &target),
                    button(ActionId::DeleteFolder, write && !ctx.at_home, &target),
                    button(ActionId::RenameFolder, write && !ctx.at_home, &target),
                    button(ActionId::FolderProperties, ctx.capabilities.can_read, &target),
                ],
            })
        }
    }
}
