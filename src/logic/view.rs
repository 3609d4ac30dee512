//! View model
//!
//! Maps the model to an immutable description of what is on screen. The
//! folder tree becomes a tree of `NodeView`s, which the terminal front end
//! flattens into rows; nothing here knows how it is drawn.

use crate::logic::actions::{present_actions, ActionContext, ActionSet};
use crate::logic::formatting::{format_timestamp, split_extension};
use crate::logic::path::breadcrumb;
use crate::logic::tree::is_expandable;
use crate::model::{ClickKind, FolderNode, ListingEntry, Model, RepoNode};

/// One folder in the view tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeView {
    pub path: String,
    pub title: String,
    pub tooltip: String,
    pub expandable: bool,
    pub expanded: bool,
    /// Children load in flight
    pub loading: bool,
    /// Active folder, last click on it
    pub selected: bool,
    /// Active folder while a file in it is selected
    pub secondary_selected: bool,
    pub trash: bool,
    pub children: Vec<NodeView>,
}

/// A visible folder row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    pub title: String,
    pub tooltip: String,
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    pub loading: bool,
    pub selected: bool,
    pub secondary_selected: bool,
    pub trash: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub id: String,
    pub path: String,
    pub title: String,
    /// Raw name without extension
    pub name: String,
    pub extension: String,
    pub tooltip: String,
    /// In the multi-select set or lasso
    pub selected: bool,
    /// Last file clicked
    pub active: bool,
    pub folder: bool,
    pub trash: bool,
    pub provenance: Option<String>,
    pub deleted: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headers {
    /// `home > admin`
    pub breadcrumb: Option<String>,
    pub buttons: Option<&'static str>,
    pub files: &'static str,
    pub folders: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserView {
    pub tree: Vec<NodeView>,
    pub files: Vec<FileRow>,
    /// Shown instead of an empty listing
    pub empty_placeholder: Option<&'static str>,
    pub headers: Headers,
    pub actions: Option<ActionSet>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BrowserView {
    /// Visible folder rows, depth first
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        flatten(&self.tree, 0, &mut rows);
        rows
    }
}

pub const EMPTY_FOLDER: &str = "This folder is empty.";
pub const EMPTY_TRASH: &str = "There are no files in the trash.";

fn tooltip(node: &RepoNode, show_descriptions: bool) -> String {
    if show_descriptions && !node.description.is_empty() {
        node.description.clone()
    } else {
        node.name.clone()
    }
}

fn node_view(model: &Model, folder: &FolderNode) -> NodeView {
    let node = &folder.node;
    let active = model.active_folder_path() == Some(node.path.as_str());
    let file_click = matches!(
        model.selection.last_click_kind(),
        ClickKind::File | ClickKind::TrashItem
    );
    let expandable = is_expandable(folder);

    NodeView {
        path: node.path.clone(),
        title: node.display_title().to_string(),
        tooltip: tooltip(node, model.context.show_descriptions),
        expandable,
        expanded: expandable && model.tree.is_expanded(&node.path),
        loading: model.tree.expanding.contains(&node.path),
        selected: active && !file_click,
        secondary_selected: active && file_click,
        trash: node.is_trash(),
        children: folder.children.iter().map(|c| node_view(model, c)).collect(),
    }
}

fn flatten(nodes: &[NodeView], depth: usize, rows: &mut Vec<TreeRow>) {
    for node in nodes {
        rows.push(TreeRow {
            path: node.path.clone(),
            title: node.title.clone(),
            tooltip: node.tooltip.clone(),
            depth,
            expandable: node.expandable,
            expanded: node.expanded,
            loading: node.loading,
            selected: node.selected,
            secondary_selected: node.secondary_selected,
            trash: node.trash,
        });
        if node.expanded {
            flatten(&node.children, depth + 1, rows);
        }
    }
}

fn file_row(model: &Model, entry: &ListingEntry) -> FileRow {
    let node = &entry.node;
    let raw = if node.name.is_empty() { &node.path } else { &node.name };
    let (name, extension) = split_extension(raw);

    FileRow {
        id: node.id.clone(),
        path: node.path.clone(),
        title: node.display_title().to_string(),
        name: name.to_string(),
        extension: extension.to_string(),
        tooltip: tooltip(node, model.context.show_descriptions),
        selected: model.selection.is_selected(&node.id),
        active: model.selection.active_file().map(|f| f.id == node.id).unwrap_or(false),
        folder: node.folder,
        trash: entry.trash,
        provenance: entry.provenance.clone(),
        deleted: entry.deleted_date.as_deref().and_then(format_timestamp),
    }
}

pub fn view(model: &Model) -> BrowserView {
    // The root itself is not shown; its children are the top level
    let tree = model
        .tree
        .root
        .as_ref()
        .map(|root| root.children.iter().map(|c| node_view(model, c)).collect())
        .unwrap_or_default();

    let in_trash = model.selection.in_trash();
    let files: Vec<FileRow> = model
        .files
        .listing
        .as_ref()
        .map(|listing| listing.entries.iter().map(|e| file_row(model, e)).collect())
        .unwrap_or_default();

    let empty_placeholder = match &model.files.listing {
        Some(listing) if listing.is_empty() && !model.files.loading => {
            Some(if in_trash { EMPTY_TRASH } else { EMPTY_FOLDER })
        }
        _ => None,
    };

    let actions = present_actions(&ActionContext::from_model(model));

    let breadcrumb = model.selection.active_folder().and_then(|folder| {
        if folder.is_trash() {
            Some(model.context.trash_label.clone())
        } else {
            breadcrumb(&folder.path)
        }
    });

    let headers = Headers {
        breadcrumb,
        buttons: actions.as_ref().map(|set| set.kind.header()),
        files: if in_trash { "Trash Contents" } else { "Files" },
        folders: if in_trash { "Browsing Trash" } else { "Folders" },
    };

    BrowserView {
        tree,
        files,
        empty_placeholder,
        headers,
        actions,
        loading: model.is_loading(),
        error: model.last_error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::tree::build_root;
    use crate::api::{RepositoryFileDto, RepositoryFileTreeDto};
    use crate::logic::sorting::NaturalCollator;
    use crate::model::{BrowserContext, Listing, Modifiers};

    fn dir(path: &str, children: Vec<RepositoryFileTreeDto>) -> RepositoryFileTreeDto {
        RepositoryFileTreeDto {
            file: RepositoryFileDto {
                id: path.to_string(),
                path: path.to_string(),
                name: path.rsplit('/').next().unwrap_or_default().to_string(),
                description: format!("{} description", path),
                folder: true,
                ..Default::default()
            },
            children,
        }
    }

    fn model() -> Model {
        let mut model = Model::new(BrowserContext::default());
        let tree = dir(
            "/",
            vec![dir("/home", vec![dir("/home/admin", vec![])]), dir("/public", vec![])],
        );
        model.tree.root = Some(build_root(&tree, &NaturalCollator, "Trash"));
        model
    }

    fn entry(id: &str) -> ListingEntry {
        ListingEntry {
            node: RepoNode {
                id: id.to_string(),
                name: id.to_string(),
                path: format!("/public/{}", id),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_collapsed_children_are_hidden() {
        let mut model = model();
        let rows = view(&model).tree_rows();
        let paths: Vec<_> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/home", "/public", ".trash"]);

        model.tree.expanded.insert("/home".to_string());
        let rows = view(&model).tree_rows();
        assert_eq!(rows[1].path, "/home/admin");
        assert_eq!(rows[1].depth, 1);
    }

    #[test]
    fn test_trash_row_is_not_expandable() {
        let model = model();
        let rows = view(&model).tree_rows();
        let trash = rows.iter().find(|r| r.trash).unwrap();
        assert!(!trash.expandable);
        assert_eq!(trash.title, "Trash");
    }

    #[test]
    fn test_tooltip_follows_show_descriptions() {
        let mut model = model();
        let rows = view(&model).tree_rows();
        assert_eq!(rows[0].tooltip, "/home description");

        model.context.show_descriptions = false;
        let rows = view(&model).tree_rows();
        assert_eq!(rows[0].tooltip, "home");
    }

    #[test]
    fn test_folder_highlight_moves_to_secondary_on_file_click() {
        let mut model = model();
        let public = model.tree.folder("/public").unwrap().node.clone();
        model.selection.select_folder(public);
        model.files.show("/public", Listing { entries: vec![entry("a.prpt")] });

        let row = view(&model).tree_rows().into_iter().find(|r| r.path == "/public").unwrap();
        assert!(row.selected && !row.secondary_selected);

        let file = entry("a.prpt").node;
        model.selection.select_file(file.clone(), Modifiers::NONE, &[file]);
        let v = view(&model);
        let row = v.tree_rows().into_iter().find(|r| r.path == "/public").unwrap();
        assert!(!row.selected && row.secondary_selected);
        assert!(v.files[0].selected && v.files[0].active);
        assert_eq!(v.files[0].name, "a");
        assert_eq!(v.files[0].extension, "prpt");
    }

    #[test]
    fn test_headers() {
        let mut model = model();
        let admin = model.tree.folder("/home/admin").unwrap().node.clone();
        model.selection.select_folder(admin);
        let v = view(&model);
        assert_eq!(v.headers.breadcrumb.as_deref(), Some("home > admin"));
        assert_eq!(v.headers.buttons, Some("Folder Actions"));
        assert_eq!(v.headers.files, "Files");

        let trash = model.tree.folder(".trash").unwrap().node.clone();
        model.selection.select_folder(trash);
        let v = view(&model);
        assert_eq!(v.headers.breadcrumb.as_deref(), Some("Trash"));
        assert_eq!(v.headers.buttons, Some("Trash Actions"));
        assert_eq!(v.headers.folders, "Browsing Trash");
    }

    #[test]
    fn test_empty_placeholder() {
        let mut model = model();
        assert_eq!(view(&model).empty_placeholder, None, "nothing loaded yet");
        model.files.show("/public", Listing::default());
        assert_eq!(view(&model).empty_placeholder, Some(EMPTY_FOLDER));
    }
}
