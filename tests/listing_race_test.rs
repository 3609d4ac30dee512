//! Tests for out-of-order listing responses and the listing cache
//!
//! Bug scenario: the user clicks folder P1, then P2 before P1's listing
//! arrives. If P1's response lands last it must not replace P2's files.

mod common;

use common::{context, deliver_listing, listing, listing_request, load_tree, sample_tree};
use repobrowse::{update, Effect, Model, Msg};

fn titles(model: &Model) -> Vec<String> {
    model
        .active_listing()
        .map(|l| l.entries.iter().map(|e| e.node.name.clone()).collect())
        .unwrap_or_default()
}

/// Test: a late response for an earlier click is not shown
#[test]
fn test_late_response_for_previous_folder_is_dropped() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (home_ticket, _) = listing_request(&effects).expect("home listing requested");

    let (model, effects) = update(model, Msg::ClickFolder { path: "/public".into() });
    let (public_ticket, path) = listing_request(&effects).expect("public listing requested");
    assert_eq!(path, "/public");
    assert!(public_ticket.seq > home_ticket.seq, "later request gets a later sequence");

    // P2 resolves first
    let (model, _) = update(
        model,
        Msg::ListingLoaded {
            ticket: public_ticket,
            path: "/public".into(),
            result: Ok(listing("/public", &["sales.prpt"])),
        },
    );
    // Then P1
    let (model, effects) = update(
        model,
        Msg::ListingLoaded {
            ticket: home_ticket,
            path: "/home/admin".into(),
            result: Ok(listing("/home/admin", &["mine.prpt"])),
        },
    );

    assert!(effects.is_empty(), "stale response must not notify: {:?}", effects);
    assert_eq!(model.active_folder_path(), Some("/public"));
    assert_eq!(titles(&model), vec!["sales.prpt"], "P2's files stay on screen");
}

/// Test: the superseded response still fills the cache for the next visit
#[test]
fn test_stale_response_still_cached() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (home_ticket, _) = listing_request(&effects).expect("home listing requested");

    let (model, effects) = update(model, Msg::ClickFolder { path: "/public".into() });
    let (model, _) = deliver_listing(model, &effects, listing("/public", &["sales.prpt"]));
    let (model, _) = update(
        model,
        Msg::ListingLoaded {
            ticket: home_ticket,
            path: "/home/admin".into(),
            result: Ok(listing("/home/admin", &["mine.prpt"])),
        },
    );

    let (model, effects) = update(model, Msg::ClickFolder { path: "/home/admin".into() });
    assert_eq!(titles(&model), vec!["mine.prpt"], "cached listing is shown immediately");
    assert!(
        listing_request(&effects).is_some(),
        "a cached listing that differs from the screen is refreshed"
    );
}

/// Test: reselecting a folder whose cached listing is on screen fetches nothing
#[test]
fn test_unchanged_cached_listing_is_not_refetched() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", &["mine.prpt"]));

    let (model, effects) = update(model, Msg::ClickFolder { path: "/home/admin".into() });
    assert!(
        !effects.iter().any(|e| matches!(e, Effect::FetchListing { .. })),
        "no fetch expected: {:?}",
        effects
    );
    assert_eq!(titles(&model), vec!["mine.prpt"]);
    assert!(!model.files.loading);
}

/// Test: marking the cache dirty forces the next selection to fetch
#[test]
fn test_dirty_cache_forces_fetch() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", &["mine.prpt"]));
    assert_eq!(model.files.cache.len(), 1);

    let (model, _) = update(model, Msg::MarkCacheDirty);
    let (model, effects) = update(model, Msg::ClickFolder { path: "/home/admin".into() });

    assert!(listing_request(&effects).is_some(), "dirty cache must not be trusted");
    assert!(model.files.cache.is_empty(), "dirty cache is wiped on use");
    assert!(!model.files.cache.is_dirty(), "dirty flag is consumed");
}

/// Test: a response requested before the cache was wiped is not cached
#[test]
fn test_response_from_before_wipe_not_cached() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (old_ticket, _) = listing_request(&effects).expect("home listing requested");

    let (model, _) = update(model, Msg::MarkCacheDirty);
    let (model, effects) = update(model, Msg::ClickFolder { path: "/public".into() });
    assert!(listing_request(&effects).is_some());

    let (model, _) = update(
        model,
        Msg::ListingLoaded {
            ticket: old_ticket,
            path: "/home/admin".into(),
            result: Ok(listing("/home/admin", &["old.prpt"])),
        },
    );
    assert!(
        !model.files.cache.contains("/home/admin"),
        "pre-wipe data must not repopulate the cache"
    );
}

/// Test: a failed listing keeps the previous files and reports the error
#[test]
fn test_failed_listing_keeps_stale_data() {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", &["mine.prpt"]));

    let (model, _) = update(model, Msg::MarkCacheDirty);
    let (model, effects) = update(model, Msg::ClickFolder { path: "/home/admin".into() });
    let (ticket, path) = listing_request(&effects).expect("refetch after dirty");
    let (model, _) = update(
        model,
        Msg::ListingLoaded {
            ticket,
            path,
            result: Err("Timeout: request timed out".into()),
        },
    );

    assert_eq!(titles(&model), vec!["mine.prpt"], "old listing stays visible");
    assert_eq!(model.last_error.as_deref(), Some("Timeout: request timed out"));
    assert!(!model.files.loading);
}
