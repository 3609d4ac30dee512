//! Shared fixtures for driving the reducer the way the runtime does

#![allow(dead_code)]

use repobrowse::api::{RepositoryFileDto, RepositoryFileListDto, RepositoryFileTreeDto};
use repobrowse::cache::RequestTicket;
use repobrowse::{update, BrowserContext, Effect, Model, Msg};

pub fn dir(path: &str, children: Vec<RepositoryFileTreeDto>) -> RepositoryFileTreeDto {
    RepositoryFileTreeDto {
        file: RepositoryFileDto {
            id: path.to_string(),
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or_default().to_string(),
            folder: true,
            ..Default::default()
        },
        children,
    }
}

pub fn file(folder: &str, name: &str) -> RepositoryFileDto {
    RepositoryFileDto {
        id: format!("{}-id", name),
        name: name.to_string(),
        title: name.split('.').next().unwrap_or_default().to_string(),
        path: format!("{}/{}", folder, name),
        ..Default::default()
    }
}

pub fn listing(folder: &str, names: &[&str]) -> RepositoryFileListDto {
    RepositoryFileListDto {
        files: names.iter().map(|name| file(folder, name)).collect(),
    }
}

/// /home/admin, /public and the trash
pub fn sample_tree() -> RepositoryFileTreeDto {
    dir(
        "/",
        vec![
            dir("/home", vec![dir("/home/admin", vec![])]),
            dir("/public", vec![dir("/public/reports", vec![])]),
        ],
    )
}

pub fn context() -> BrowserContext {
    BrowserContext {
        home_folder: "/home/admin".to_string(),
        ..Default::default()
    }
}

pub fn tree_seq(effects: &[Effect]) -> Option<u64> {
    effects.iter().find_map(|e| match e {
        Effect::FetchTree { seq, .. } => Some(*seq),
        _ => None,
    })
}

pub fn listing_request(effects: &[Effect]) -> Option<(RequestTicket, String)> {
    effects.iter().find_map(|e| match e {
        Effect::FetchListing { ticket, path, .. } => Some((*ticket, path.clone())),
        _ => None,
    })
}

/// Redraw and deliver `tree`; returns the model and the effects of the
/// tree response (listing and permission requests for the start folder)
pub fn load_tree(model: Model, tree: RepositoryFileTreeDto) -> (Model, Vec<Effect>) {
    let (model, effects) = update(model, Msg::Redraw { initial_path: None });
    let seq = tree_seq(&effects).expect("redraw should fetch the tree");
    update(model, Msg::TreeLoaded { seq, result: Ok(tree) })
}

/// Answer the listing request found in `effects`
pub fn deliver_listing(model: Model, effects: &[Effect], files: RepositoryFileListDto) -> (Model, Vec<Effect>) {
    let (ticket, path) = listing_request(effects).expect("a listing request should be pending");
    update(
        model,
        Msg::ListingLoaded {
            ticket,
            path,
            result: Ok(files),
        },
    )
}

/// Start folder /home/admin showing the given files
pub fn home_with_files(names: &[&str]) -> Model {
    let (model, effects) = load_tree(Model::new(context()), sample_tree());
    let (model, _) = deliver_listing(model, &effects, listing("/home/admin", names));
    model
}

/// Ids of the effective file selection, sorted
pub fn selected_ids(model: &Model) -> Vec<String> {
    let mut ids: Vec<String> = model.selection.selected_files().into_iter().map(|n| n.id).collect();
    ids.sort();
    ids
}
