//! Repository path utilities
//!
//! Repository paths are slash-delimited and case-sensitive. On the wire a
//! whole path travels as a single URL path segment, so separators are
//! substituted with colons (and literal colons with tabs) before URL
//! encoding. The substitution is reversible.

/// Synthetic path of the deleted-items pseudo-folder
pub const TRASH_PATH: &str = ".trash";

/// Root of the repository
pub const ROOT_PATH: &str = "/";

pub fn is_trash(path: &str) -> bool {
    path == TRASH_PATH
}

/// Replace `:` with tab, then `/` with `:`
///
/// # Examples
/// ```
/// use repobrowse::logic::path::encode_repository_path;
///
/// assert_eq!(encode_repository_path("/home/admin"), ":home:admin");
/// assert_eq!(encode_repository_path("/"), ":");
/// ```
pub fn encode_repository_path(path: &str) -> String {
    path.replace(':', "\t").replace('/', ":")
}

/// Encode a repository path for use as one URL path segment
pub fn encode_path_component(path: &str) -> String {
    let path = if path.is_empty() { ROOT_PATH } else { path };
    urlencoding::encode(&encode_repository_path(path)).into_owned()
}

/// Parent folder of a path (`/a/b` -> `/a`, `/a` -> `/`)
pub fn parent_path(path: &str) -> Option<String> {
    if path == ROOT_PATH || path.is_empty() || is_trash(path) {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => Some(ROOT_PATH.to_string()),
        Some(idx) => Some(trimmed[..idx].to_string()),
        None => None,
    }
}

/// All strict ancestors, nearest last (`/a/b/c` -> [`/`, `/a`, `/a/b`])
pub fn ancestors(path: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = parent_path(path);
    while let Some(p) = current {
        current = parent_path(&p);
        result.push(p);
    }
    result.reverse();
    result
}

/// Breadcrumb label for a folder path (`/home/admin` -> `home > admin`)
pub fn breadcrumb(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    Some(path.split('/').skip(1).collect::<Vec<_>>().join(" > "))
}
