//! Title collation and tree sorting
//!
//! The collator is injected through the browser context so hosts can plug
//! in a locale-specific comparison. The default compares naturally
//! ("file2" < "file10") and ignores case, falling back to a byte
//! comparison so distinct titles never compare equal.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::model::FolderNode;

/// Locale-aware comparison of display titles
pub trait TitleCollator: Debug + Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalCollator;

impl TitleCollator for NaturalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        alphanumeric_sort::compare_str(a.to_lowercase(), b.to_lowercase()).then_with(|| a.cmp(b))
    }
}

/// Plain byte-wise comparison, for hosts that want server order semantics
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl TitleCollator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Sort every level of the tree by display title. Each level is ordered
/// independently; a folder's position never depends on its descendants.
pub fn sort_tree(node: &mut FolderNode, collator: &dyn TitleCollator) {
    for child in node.children.iter_mut() {
        sort_tree(child, collator);
    }
    sort_level(&mut node.children, collator);
}

/// Sort one level (stable, so equal titles keep server order)
pub fn sort_level(children: &mut [FolderNode], collator: &dyn TitleCollator) {
    children.sort_by(|a, b| collator.compare(a.node.display_title(), b.node.display_title()));
}
