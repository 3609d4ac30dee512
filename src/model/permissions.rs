//! Permission Model
//!
//! Results of the asynchronous permission queries for the active folder
//! and file, plus the static capabilities of the logged-in user.
//!
//! Flags are `None` until their query answers; the presenter treats
//! `None` as denied. Failed queries are stored as `Some(false)`.

use crate::api::{AccessMap, Permission};

/// The four independent permission queries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionQuery {
    /// `canDownload?dirPath=` for the active folder
    FolderDownload,
    /// `canUpload?dirPath=` for the active folder
    FolderUpload,
    /// `canAccessMap?permissions=1` for the active folder
    FolderAccess,
    /// `canAccessMap?permissions=1|2` for the active file
    FileAccess,
}

impl PermissionQuery {
    pub fn is_folder_query(&self) -> bool {
        !matches!(self, PermissionQuery::FileAccess)
    }

    /// Permissions requested from `canAccessMap`, if this is an access query
    pub fn access_permissions(&self) -> &'static [Permission] {
        match self {
            PermissionQuery::FolderAccess => &[Permission::Write],
            PermissionQuery::FileAccess => &[Permission::Write, Permission::Delete],
            _ => &[],
        }
    }
}

/// Raw answer of a permission query
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermissionAnswer {
    Flag(bool),
    Access(AccessMap),
}

impl PermissionAnswer {
    fn allows(&self, permission: Permission) -> bool {
        match self {
            PermissionAnswer::Flag(allowed) => *allowed,
            PermissionAnswer::Access(map) => map.allows(permission),
        }
    }
}

/// Static capabilities granted to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub can_download: bool,
    pub can_publish: bool,
    pub can_read: bool,
    pub can_create: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_download: false,
            can_publish: false,
            can_read: true,
            can_create: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionFlags {
    /// Folder the folder flags belong to
    pub folder_path: Option<String>,
    pub folder_download: Option<bool>,
    pub folder_upload: Option<bool>,
    pub folder_write: Option<bool>,

    /// File the file flags belong to
    pub file_path: Option<String>,
    pub file_write: Option<bool>,
    pub file_delete: Option<bool>,
}

impl PermissionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything known about the folder and retarget to `path`
    pub fn reset_folder(&mut self, path: Option<&str>) {
        self.folder_path = path.map(str::to_string);
        self.folder_download = None;
        self.folder_upload = None;
        self.folder_write = None;
    }

    pub fn reset_file(&mut self, path: Option<&str>) {
        self.file_path = path.map(str::to_string);
        self.file_write = None;
        self.file_delete = None;
    }

    pub fn folder_download(&self) -> bool {
        self.folder_download.unwrap_or(false)
    }

    pub fn folder_upload(&self) -> bool {
        self.folder_upload.unwrap_or(false)
    }

    pub fn folder_write(&self) -> bool {
        self.folder_write.unwrap_or(false)
    }

    pub fn file_write(&self) -> bool {
        self.file_write.unwrap_or(false)
    }

    pub fn file_delete(&self) -> bool {
        self.file_delete.unwrap_or(false)
    }

    /// Record a query result. Answers for a folder or file that is no
    /// longer the target are ignored; errors deny. Returns whether
    /// anything was recorded.
    pub fn apply(&mut self, query: PermissionQuery, path: &str, result: Result<&PermissionAnswer, &str>) -> bool {
        let target = if query.is_folder_query() {
            &self.folder_path
        } else {
            &self.file_path
        };
        if target.as_deref() != Some(path) {
            return false;
        }

        let allows = |permission: Permission| match result {
            Ok(answer) => answer.allows(permission),
            Err(_) => false,
        };

        match query {
            PermissionQuery::FolderDownload => self.folder_download = Some(allows(Permission::Read)),
            PermissionQuery::FolderUpload => self.folder_upload = Some(allows(Permission::Read)),
            PermissionQuery::FolderAccess => self.folder_write = Some(allows(Permission::Write)),
            PermissionQuery::FileAccess => {
                self.file_write = Some(allows(Permission::Write));
                self.file_delete = Some(allows(Permission::Delete));
            }
        }
        true
    }
}
