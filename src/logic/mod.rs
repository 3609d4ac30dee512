//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - actions: Action/button presenter
//! - errors: Transport error classification
//! - formatting: Dates and file names for display
//! - listing: Listing and trash listing reformatting
//! - navigation: Cursor movement
//! - path: Repository path encoding and ancestry
//! - selection: Multi-select set operations
//! - sorting: Title collation and recursive tree sorting
//! - tree: Folder tree construction and lookup
//! - view: View model for the front end

pub mod actions;
pub mod errors;
pub mod formatting;
pub mod listing;
pub mod navigation;
pub mod path;
pub mod selection;
pub mod sorting;
pub mod tree;
pub mod view;
