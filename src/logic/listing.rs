//! Listing reformatting
//!
//! Turns `children`/`deleted` responses into the display shape shared by
//! both. Entries keep the order the server sent them in.

use crate::api::{RepositoryFileDto, RepositoryFileListDto};
use crate::model::{Listing, ListingEntry, RepoNode};

pub fn reformat_listing(dto: &RepositoryFileListDto) -> Listing {
    Listing {
        entries: dto
            .files
            .iter()
            .map(|file| ListingEntry {
                node: RepoNode::from(file),
                trash: false,
                provenance: None,
                deleted_date: None,
            })
            .collect(),
    }
}

/// Deleted items are tagged as trash and carry where they came from
pub fn reformat_trash_listing(dto: &RepositoryFileListDto, origin_label: &str) -> Listing {
    Listing {
        entries: dto
            .files
            .iter()
            .map(|file| ListingEntry {
                node: RepoNode::from(file),
                trash: true,
                provenance: Some(provenance(file, origin_label)),
                deleted_date: file.deleted_date.clone(),
            })
            .collect(),
    }
}

/// `"<origin label> <original parent>/<name>"`. Names that already start
/// with a slash are appended as is.
pub fn provenance(file: &RepositoryFileDto, origin_label: &str) -> String {
    let parent = file.original_parent_folder_path.as_deref().unwrap_or_default();
    if file.name.starts_with('/') {
        format!("{} {}{}", origin_label, parent, file.name)
    } else {
        format!("{} {}/{}", origin_label, parent, file.name)
    }
}
