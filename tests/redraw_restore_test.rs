//! Tests for carrying the selection across a redraw
//!
//! Refresh reloads the tree from scratch; the folder and file the user
//! had selected should come back once the new data arrives.

mod common;

use common::{deliver_listing, home_with_files, listing, tree_seq, sample_tree};
use repobrowse::messages::HostEvent;
use repobrowse::model::{ClickKind, Modifiers};
use repobrowse::{update, Effect, Msg};

fn refresh_and_reload(model: repobrowse::Model) -> (repobrowse::Model, Vec<Effect>) {
    let (model, effects) = update(model, Msg::Refresh);
    assert!(
        effects.contains(&Effect::FireHostEvent(HostEvent::RefreshBrowsePerspective {
            show_descriptions: true
        })),
        "refresh tells the host"
    );
    let seq = tree_seq(&effects).expect("refresh reloads the tree");
    update(model, Msg::TreeLoaded { seq, result: Ok(sample_tree()) })
}

/// Test: the selected file is reselected after a refresh
#[test]
fn test_refresh_restores_file() {
    let model = home_with_files(&["a.prpt", "b.prpt"]);
    let (model, _) = update(
        model,
        Msg::ClickFile {
            id: "b.prpt-id".into(),
            modifiers: Modifiers::NONE,
        },
    );

    let (model, effects) = refresh_and_reload(model);
    assert_eq!(model.active_folder_path(), Some("/home/admin"));
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", &["a.prpt", "b.prpt"]));

    assert_eq!(model.selection.last_click_kind(), ClickKind::File);
    assert_eq!(model.selection.active_file().map(|f| f.id.as_str()), Some("b.prpt-id"));
    assert!(model.pending_restore.is_none());
}

/// Test: if the file disappeared, the folder stays selected
#[test]
fn test_refresh_falls_back_to_folder() {
    let model = home_with_files(&["a.prpt", "b.prpt"]);
    let (model, _) = update(
        model,
        Msg::ClickFile {
            id: "b.prpt-id".into(),
            modifiers: Modifiers::NONE,
        },
    );

    let (model, effects) = refresh_and_reload(model);
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", &["a.prpt"]));

    assert_eq!(model.selection.last_click_kind(), ClickKind::Folder);
    assert!(model.selection.active_file().is_none());
    assert_eq!(model.active_folder_path(), Some("/home/admin"));
}

/// Test: a folder selection survives a redraw without touching files
#[test]
fn test_redraw_keeps_clicked_folder() {
    let model = home_with_files(&["a.prpt"]);
    let (model, effects) = update(model, Msg::ClickFolder { path: "/public".into() });
    let (model, _) = deliver_listing(model, &effects, listing("/public", &["sales.prpt"]));

    let (model, effects) = update(model, Msg::Redraw { initial_path: None });
    let seq = tree_seq(&effects).expect("tree fetch");
    let (model, _) = update(model, Msg::TreeLoaded { seq, result: Ok(sample_tree()) });

    assert_eq!(model.active_folder_path(), Some("/public"));
    assert_eq!(model.selection.last_click_kind(), ClickKind::Folder);
    assert!(model.tree.is_expanded("/"), "ancestors of the restored folder are expanded");
}
