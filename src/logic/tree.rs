//! Folder tree construction and lookup
//!
//! Maps tree responses into `FolderNode`s, appends the synthetic trash
//! folder, and grafts lazily loaded subtrees onto an existing tree.

use crate::api::RepositoryFileTreeDto;
use crate::logic::path::TRASH_PATH;
use crate::logic::sorting::{sort_level, sort_tree, TitleCollator};
use crate::model::{FolderNode, RepoNode};

/// Map a tree response, keeping folders only
pub fn from_dto(dto: &RepositoryFileTreeDto) -> FolderNode {
    let children: Vec<FolderNode> = dto
        .children
        .iter()
        .filter(|c| c.file.folder)
        .map(from_dto)
        .collect();

    FolderNode {
        node: RepoNode::from(&dto.file),
        children_loaded: !children.is_empty(),
        children,
    }
}

/// The deleted-items pseudo-folder. It is never fetched and has nothing
/// to expand.
pub fn trash_node(label: &str) -> FolderNode {
    FolderNode {
        node: RepoNode {
            id: label.to_string(),
            path: TRASH_PATH.to_string(),
            title: label.to_string(),
            name: label.to_string(),
            folder: true,
            hidden: false,
            description: String::new(),
        },
        children: Vec::new(),
        children_loaded: true,
    }
}

/// Build the displayed tree from a root response: sort every level, then
/// append the trash as the last top-level entry.
pub fn build_root(dto: &RepositoryFileTreeDto, collator: &dyn TitleCollator, trash_label: &str) -> FolderNode {
    let mut root = from_dto(dto);
    if root.node.path.is_empty() {
        root.node.path = "/".to_string();
    }
    sort_tree(&mut root, collator);
    root.children.retain(|c| c.node.path != TRASH_PATH);
    root.children.push(trash_node(trash_label));
    root.children_loaded = true;
    root
}

pub fn find<'a>(node: &'a FolderNode, path: &str) -> Option<&'a FolderNode> {
    if node.node.path == path {
        return Some(node);
    }
    node.children.iter().find_map(|c| find(c, path))
}

pub fn find_mut<'a>(node: &'a mut FolderNode, path: &str) -> Option<&'a mut FolderNode> {
    if node.node.path == path {
        return Some(node);
    }
    node.children.iter_mut().find_map(|c| find_mut(c, path))
}

/// Replace the children of `path` with a freshly loaded subtree.
/// Returns false if `path` is no longer in the tree.
pub fn graft_children(
    root: &mut FolderNode,
    path: &str,
    dto: &RepositoryFileTreeDto,
    collator: &dyn TitleCollator,
) -> bool {
    let Some(target) = find_mut(root, path) else {
        return false;
    };

    let mut children: Vec<FolderNode> = dto
        .children
        .iter()
        .filter(|c| c.file.folder)
        .map(from_dto)
        .collect();
    for child in children.iter_mut() {
        sort_tree(child, collator);
    }
    sort_level(&mut children, collator);

    target.children = children;
    target.children_loaded = true;
    true
}

/// First top-level folder, used when neither the previous folder nor the
/// start folder is in the tree
pub fn first_visible_folder(root: &FolderNode) -> Option<&FolderNode> {
    root.children.iter().find(|c| c.node.folder && !c.node.path.is_empty())
}

/// A folder can be expanded unless it is the trash or is known to be empty
pub fn is_expandable(node: &FolderNode) -> bool {
    !node.node.is_trash() && (!node.children_loaded || !node.children.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RepositoryFileDto;
    use crate::logic::sorting::NaturalCollator;

    fn dto(path: &str, title: &str, children: Vec<RepositoryFileTreeDto>) -> RepositoryFileTreeDto {
        RepositoryFileTreeDto {
            file: RepositoryFileDto {
                id: path.to_string(),
                path: path.to_string(),
                title: title.to_string(),
                name: title.to_string(),
                folder: true,
                ..Default::default()
            },
            children,
        }
    }

    fn sample() -> RepositoryFileTreeDto {
        dto(
            "/",
            "",
            vec![
                dto("/public", "public", vec![dto("/public/b", "b", vec![]), dto("/public/A", "A", vec![])]),
                dto("/home", "home", vec![dto("/home/admin", "admin", vec![])]),
            ],
        )
    }

    #[test]
    fn test_build_root_sorts_and_appends_trash() {
        let root = build_root(&sample(), &NaturalCollator, "Trash");
        let paths: Vec<_> = root.children.iter().map(|c| c.node.path.as_str()).collect();
        assert_eq!(paths, vec!["/home", "/public", ".trash"]);
        let public = find(&root, "/public").unwrap();
        let sub: Vec<_> = public.children.iter().map(|c| c.node.title.as_str()).collect();
        assert_eq!(sub, vec!["A", "b"]);
    }

    #[test]
    fn test_trash_sorts_last_regardless_of_title() {
        let root = build_root(&sample(), &NaturalCollator, "AAA Trash");
        assert_eq!(root.children.last().unwrap().node.path, TRASH_PATH);
    }

    #[test]
    fn test_files_are_dropped_from_tree() {
        let mut tree = sample();
        tree.children.push(RepositoryFileTreeDto {
            file: RepositoryFileDto {
                path: "/readme.txt".to_string(),
                folder: false,
                ..Default::default()
            },
            children: vec![],
        });
        let root = build_root(&tree, &NaturalCollator, "Trash");
        assert!(find(&root, "/readme.txt").is_none());
    }

    #[test]
    fn test_leaf_folders_are_not_loaded() {
        let root = build_root(&sample(), &NaturalCollator, "Trash");
        let admin = find(&root, "/home/admin").unwrap();
        assert!(!admin.children_loaded);
        assert!(is_expandable(admin));
        let trash = find(&root, TRASH_PATH).unwrap();
        assert!(!is_expandable(trash));
    }

    #[test]
    fn test_graft_children() {
        let mut root = build_root(&sample(), &NaturalCollator, "Trash");
        let sub = dto(
            "/home/admin",
            "admin",
            vec![dto("/home/admin/z", "z", vec![]), dto("/home/admin/c", "c", vec![])],
        );
        assert!(graft_children(&mut root, "/home/admin", &sub, &NaturalCollator));
        let admin = find(&root, "/home/admin").unwrap();
        assert!(admin.children_loaded);
        let titles: Vec<_> = admin.children.iter().map(|c| c.node.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "z"]);
        assert!(!graft_children(&mut root, "/gone", &sub, &NaturalCollator));
    }

    #[test]
    fn test_graft_empty_marks_loaded() {
        let mut root = build_root(&sample(), &NaturalCollator, "Trash");
        assert!(graft_children(&mut root, "/home/admin", &dto("/home/admin", "admin", vec![]), &NaturalCollator));
        let admin = find(&root, "/home/admin").unwrap();
        assert!(!is_expandable(admin), "known-empty folder has nothing to expand");
    }

    #[test]
    fn test_first_visible_folder() {
        let root = build_root(&sample(), &NaturalCollator, "Trash");
        assert_eq!(first_visible_folder(&root).unwrap().node.path, "/home");
    }
}
