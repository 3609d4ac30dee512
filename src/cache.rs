//! In-memory listing cache and request sequencing
//!
//! The cache remembers the last listing fetched for each folder path.
//! Wiping it bumps a generation counter; responses to requests issued
//! under an older generation are not written back.

use std::collections::HashMap;

use crate::model::Listing;

/// Identifies one listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub generation: u64,
}

/// Per-loader request counter. A response is current only if no request
/// was issued after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    current: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}

/// What to do when a listing is requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPlan {
    /// Cached data equals what is shown; nothing to fetch
    Reuse,
    /// Show the cached data now and refresh it in the background
    ApplyCachedAndRefresh(Listing),
    /// Nothing usable cached
    Fetch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCache {
    entries: HashMap<String, Listing>,
    dirty: bool,
    generation: u64,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&Listing> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the repository as changed elsewhere. The next plan wipes the cache.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    /// Store a response. Dropped if the cache was wiped after the request
    /// went out. Returns whether it was stored.
    pub fn insert(&mut self, path: &str, listing: Listing, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.entries.insert(path.to_string(), listing);
        true
    }

    /// Decide how to serve `path` given the listing currently displayed.
    /// Consumes the dirty flag.
    pub fn plan(&mut self, path: &str, displayed: Option<&Listing>) -> ListingPlan {
        if self.dirty {
            self.clear();
            self.dirty = false;
            return ListingPlan::Fetch;
        }

        match self.entries.get(path) {
            Some(cached) if Some(cached) == displayed => ListingPlan::Reuse,
            Some(cached) => ListingPlan::ApplyCachedAndRefresh(cached.clone()),
            None => ListingPlan::Fetch,
        }
    }
}
