//! Tests for the folder tree: sorting, the trash node, lazy expansion and
//! stale tree responses

mod common;

use common::{context, dir, load_tree, sample_tree, tree_seq};
use repobrowse::logic::view::view;
use repobrowse::{update, Effect, Model, Msg};

fn child_names(model: &Model, path: &str) -> Vec<String> {
    model
        .tree
        .folder(path)
        .map(|f| f.children.iter().map(|c| c.node.name.clone()).collect())
        .unwrap_or_default()
}

/// Test: every level is sorted naturally and case-insensitively
#[test]
fn test_tree_sorted_recursively() {
    let tree = dir(
        "/",
        vec![
            dir(
                "/public",
                vec![
                    dir("/public/folder10", vec![]),
                    dir("/public/Folder2", vec![]),
                    dir("/public/archive", vec![]),
                ],
            ),
            dir("/home", vec![dir("/home/admin", vec![])]),
        ],
    );
    let (model, _) = load_tree(Model::new(context()), tree);

    assert_eq!(child_names(&model, "/"), vec!["home", "public", "Trash"], "trash goes last");
    assert_eq!(
        child_names(&model, "/public"),
        vec!["archive", "Folder2", "folder10"],
        "nested levels are sorted too"
    );
}

/// Test: the trash is a leaf and cannot be expanded
#[test]
fn test_trash_never_expands() {
    let (model, _) = load_tree(Model::new(context()), sample_tree());
    let (model, effects) = update(model, Msg::ExpandFolder { path: ".trash".into() });
    assert!(effects.is_empty(), "expanding the trash does nothing: {:?}", effects);
    assert!(!model.tree.is_expanded(".trash"));

    let rows = view(&model).tree_rows();
    let trash = rows.iter().find(|r| r.trash).expect("trash row is visible");
    assert!(!trash.expandable);
}

/// Test: a folder at the depth limit loads its children once when expanded
#[test]
fn test_lazy_expand_loads_once() {
    let (model, _) = load_tree(Model::new(context()), sample_tree());

    let (model, effects) = update(model, Msg::ExpandFolder { path: "/public/reports".into() });
    let fetches = effects
        .iter()
        .filter(|e| matches!(e, Effect::FetchSubtree { .. }))
        .count();
    assert_eq!(fetches, 1);

    let (model, effects) = update(model, Msg::ToggleFolder { path: "/public/reports".into() });
    assert!(!model.tree.is_expanded("/public/reports"), "toggle collapses");
    assert!(!effects.iter().any(|e| matches!(e, Effect::FetchSubtree { .. })));

    let (model, effects) = update(model, Msg::ExpandFolder { path: "/public/reports".into() });
    assert!(
        !effects.iter().any(|e| matches!(e, Effect::FetchSubtree { .. })),
        "load already in flight"
    );

    let (model, _) = update(
        model,
        Msg::SubtreeLoaded {
            path: "/public/reports".into(),
            result: Ok(dir(
                "/public/reports",
                vec![dir("/public/reports/q2", vec![]), dir("/public/reports/q1", vec![])],
            )),
        },
    );
    assert_eq!(child_names(&model, "/public/reports"), vec!["q1", "q2"]);
    assert!(model.tree.expanding.is_empty());
}

/// Test: a tree response overtaken by a newer redraw is ignored
#[test]
fn test_stale_tree_response_dropped() {
    let model = Model::new(context());
    let (model, first) = update(model, Msg::Redraw { initial_path: None });
    let (model, second) = update(model, Msg::Redraw { initial_path: None });
    let old = tree_seq(&first).expect("first fetch");
    let new = tree_seq(&second).expect("second fetch");

    let (model, effects) = update(model, Msg::TreeLoaded { seq: old, result: Ok(sample_tree()) });
    assert!(effects.is_empty(), "stale tree must not apply");
    assert!(model.tree.root.is_none());

    let (model, _) = update(model, Msg::TreeLoaded { seq: new, result: Ok(sample_tree()) });
    assert!(model.tree.root.is_some());
    assert_eq!(model.active_folder_path(), Some("/home/admin"));
}

/// Test: the start folder override wins over the home folder
#[test]
fn test_initial_path_override() {
    let model = Model::new(context());
    let (model, effects) = update(
        model,
        Msg::Redraw {
            initial_path: Some("/public".into()),
        },
    );
    let seq = tree_seq(&effects).expect("tree fetch");
    let (model, _) = update(model, Msg::TreeLoaded { seq, result: Ok(sample_tree()) });
    assert_eq!(model.active_folder_path(), Some("/public"));
}

/// Test: an unknown start folder falls back to the first visible folder
#[test]
fn test_missing_start_folder_falls_back() {
    let ctx = repobrowse::BrowserContext {
        home_folder: "/home/nobody".into(),
        ..Default::default()
    };
    let (model, _) = load_tree(Model::new(ctx), sample_tree());
    assert_eq!(model.active_folder_path(), Some("/home"));
}

fn subtree_fetches(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::FetchSubtree { path, .. } => Some(path.clone()),
            _ => None,
        })
        .collect()
}

/// Test: a refresh reloads children that were loaded lazily before it
#[test]
fn test_refresh_reloads_lazily_expanded_folder() {
    let (model, _) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = update(model, Msg::ExpandFolder { path: "/public".into() });
    let (model, _) = update(model, Msg::ExpandFolder { path: "/public/reports".into() });
    let (model, _) = update(
        model,
        Msg::SubtreeLoaded {
            path: "/public/reports".into(),
            result: Ok(dir("/public/reports", vec![dir("/public/reports/q1", vec![])])),
        },
    );
    assert_eq!(child_names(&model, "/public/reports"), vec!["q1"]);

    let (model, effects) = update(model, Msg::Refresh);
    let seq = tree_seq(&effects).expect("refresh fetches the tree");
    let (model, effects) = update(model, Msg::TreeLoaded { seq, result: Ok(sample_tree()) });

    assert_eq!(
        subtree_fetches(&effects),
        vec!["/public/reports".to_string()],
        "children missing from the new tree must be fetched again"
    );
    assert!(model.tree.is_expanded("/public/reports"));
    assert!(model.tree.expanding.contains("/public/reports"));

    let (model, _) = update(
        model,
        Msg::SubtreeLoaded {
            path: "/public/reports".into(),
            result: Ok(dir("/public/reports", vec![dir("/public/reports/q1", vec![])])),
        },
    );
    let rows = view(&model).tree_rows();
    assert!(
        rows.iter().any(|r| r.path == "/public/reports/q1"),
        "reloaded children are visible again"
    );
}

/// Test: a subtree load overtaken by a redraw is issued again
#[test]
fn test_redraw_during_subtree_load_refetches() {
    let (model, _) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = update(model, Msg::ExpandFolder { path: "/public/reports".into() });

    let (model, effects) = update(model, Msg::Redraw { initial_path: None });
    let seq = tree_seq(&effects).expect("redraw fetches the tree");

    // The old load lands while the tree is reloading
    let (model, _) = update(
        model,
        Msg::SubtreeLoaded {
            path: "/public/reports".into(),
            result: Ok(dir("/public/reports", vec![dir("/public/reports/q1", vec![])])),
        },
    );

    let (model, effects) = update(model, Msg::TreeLoaded { seq, result: Ok(sample_tree()) });
    assert_eq!(subtree_fetches(&effects), vec!["/public/reports".to_string()]);
    assert!(model.tree.is_expanded("/public/reports"));
}

/// Test: expanded folders missing from the reloaded tree are forgotten
#[test]
fn test_removed_folder_leaves_expanded_set() {
    let (model, _) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = update(model, Msg::ExpandFolder { path: "/public".into() });
    assert!(model.tree.is_expanded("/public"));

    let smaller = dir("/", vec![dir("/home", vec![dir("/home/admin", vec![])])]);
    let (model, effects) = update(model, Msg::Redraw { initial_path: None });
    let seq = tree_seq(&effects).expect("redraw fetches the tree");
    let (model, effects) = update(model, Msg::TreeLoaded { seq, result: Ok(smaller) });

    assert!(!model.tree.is_expanded("/public"));
    assert!(subtree_fetches(&effects).is_empty());
}
