//! Multi-select set operations
//!
//! Pure functions over node collections. Nodes are identified by id;
//! collections keep first-insertion order but never hold duplicates.

use crate::model::RepoNode;

/// Append `node` unless a node with the same id is already present
pub fn push_unique(set: &mut Vec<RepoNode>, node: &RepoNode) {
    if !set.iter().any(|n| n.id == node.id) {
        set.push(node.clone());
    }
}

/// Merge `extra` into `set`, skipping ids already present
pub fn merge_unique(set: &mut Vec<RepoNode>, extra: &[RepoNode]) {
    for node in extra {
        push_unique(set, node);
    }
}

/// Remove `node` if present, add it otherwise. Returns true if it was added.
pub fn toggle(set: &mut Vec<RepoNode>, node: &RepoNode) -> bool {
    match set.iter().position(|n| n.id == node.id) {
        Some(idx) => {
            set.remove(idx);
            false
        }
        None => {
            set.push(node.clone());
            true
        }
    }
}

/// Contiguous run of nodes between `anchor_id` and `target_id`, inclusive,
/// in display order. Direction doesn't matter. If either end is missing
/// from `order` the run is just the target (when present).
///
/// # Examples
/// ```
/// use repobrowse::logic::selection::lasso_range;
/// use repobrowse::model::RepoNode;
///
/// let order: Vec<RepoNode> = ["a", "b", "c", "d"]
///     .iter()
///     .map(|id| RepoNode { id: id.to_string(), ..Default::default() })
///     .collect();
///
/// let ids = |v: Vec<RepoNode>| v.into_iter().map(|n| n.id).collect::<Vec<_>>();
/// assert_eq!(ids(lasso_range(&order, "b", "d")), vec!["b", "c", "d"]);
/// assert_eq!(ids(lasso_range(&order, "d", "b")), vec!["b", "c", "d"]);
/// ```
pub fn lasso_range(order: &[RepoNode], anchor_id: &str, target_id: &str) -> Vec<RepoNode> {
    let target = order.iter().position(|n| n.id == target_id);
    let anchor = order.iter().position(|n| n.id == anchor_id);

    match (anchor, target) {
        (Some(a), Some(t)) => {
            let (start, end) = if a <= t { (a, t) } else { (t, a) };
            order[start..=end].to_vec()
        }
        (None, Some(t)) => vec![order[t].clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<RepoNode> {
        ids.iter()
            .map(|id| RepoNode {
                id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn ids(set: &[RepoNode]) -> Vec<&str> {
        set.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_push_unique_ignores_duplicates() {
        let mut set = nodes(&["a"]);
        push_unique(&mut set, &nodes(&["a"])[0]);
        push_unique(&mut set, &nodes(&["b"])[0]);
        assert_eq!(ids(&set), vec!["a", "b"]);
    }

    #[test]
    fn test_merge_unique() {
        let mut set = nodes(&["a", "b"]);
        merge_unique(&mut set, &nodes(&["b", "c"]));
        assert_eq!(ids(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle() {
        let mut set = nodes(&["a", "b"]);
        assert!(!toggle(&mut set, &nodes(&["a"])[0]));
        assert_eq!(ids(&set), vec!["b"]);
        assert!(toggle(&mut set, &nodes(&["c"])[0]));
        assert_eq!(ids(&set), vec!["b", "c"]);
    }

    #[test]
    fn test_lasso_same_node() {
        let order = nodes(&["a", "b", "c"]);
        assert_eq!(ids(&lasso_range(&order, "b", "b")), vec!["b"]);
    }

    #[test]
    fn test_lasso_missing_anchor() {
        let order = nodes(&["a", "b", "c"]);
        assert_eq!(ids(&lasso_range(&order, "zzz", "c")), vec!["c"]);
        assert!(lasso_range(&order, "a", "zzz").is_empty());
    }
}
