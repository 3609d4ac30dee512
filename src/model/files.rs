//! File List Model
//!
//! The displayed listing, the folder it belongs to, and the cache and
//! sequence used by the listing loader.

use super::types::Listing;
use crate::cache::{ListingCache, RequestSequence};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileListModel {
    /// Listing on screen. Kept while a new one loads or after a failure.
    pub listing: Option<Listing>,

    /// Folder the displayed listing belongs to
    pub listing_path: Option<String>,

    pub cache: ListingCache,

    pub sequence: RequestSequence,

    /// A listing request is in flight
    pub loading: bool,

    /// Ids of every deleted item, from the last trash listing
    pub deleted_ids: Vec<String>,
}

impl FileListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listing shown for `path`, if the displayed one belongs to it
    pub fn listing_for(&self, path: &str) -> Option<&Listing> {
        match self.listing_path.as_deref() {
            Some(shown) if shown == path => self.listing.as_ref(),
            _ => None,
        }
    }

    /// Replace the displayed listing. Returns whether anything changed.
    pub fn show(&mut self, path: &str, listing: Listing) -> bool {
        let changed = self.listing_path.as_deref() != Some(path) || self.listing.as_ref() != Some(&listing);
        self.listing_path = Some(path.to_string());
        self.listing = Some(listing);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_reports_change() {
        let mut model = FileListModel::new();
        assert!(model.show("/public", Listing::default()));
        assert!(!model.show("/public", Listing::default()));
        assert!(model.show("/home", Listing::default()), "same data under another folder");
    }

    #[test]
    fn test_listing_for_other_folder() {
        let mut model = FileListModel::new();
        model.show("/public", Listing::default());
        assert!(model.listing_for("/public").is_some());
        assert!(model.listing_for("/home").is_none());
    }
}
