//! State transitions
//!
//! `update` takes the current model and one message and returns the next
//! model plus the effects the runtime must execute. It performs no I/O,
//! so every interaction can be replayed in a test.
//!
//! Loaders guard against out-of-order responses with request sequence
//! numbers: a response is applied only if no request for the same loader
//! was issued after it.

use tracing::{debug, info, warn};

use crate::api::{RepositoryFileListDto, RepositoryFileTreeDto};
use crate::cache::{ListingPlan, RequestTicket};
use crate::logic::actions::{present_actions, ActionContext, ActionId, ActionTarget};
use crate::logic::listing::{reformat_listing, reformat_trash_listing};
use crate::logic::path::{is_trash, ROOT_PATH};
use crate::logic::tree;
use crate::messages::{ChangeKind, Effect, HostEvent, Msg, OpenMode};
use crate::model::{ClickKind, Listing, Model, Modifiers, PermissionQuery, RepoNode, SelectionSnapshot};

pub fn update(mut model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        Msg::Redraw { initial_path } => {
            if let Some(path) = initial_path {
                model.start_folder = Some(path);
            }
            redraw(&mut model, &mut effects);
        }

        Msg::ClickFolder { path } => {
            let Some(folder) = model.tree.folder(&path) else {
                debug!("Ignoring click on unknown folder {}", path);
                return (model, effects);
            };
            let node = folder.node.clone();
            model.pending_restore = None;
            activate_folder(&mut model, &mut effects, node);
        }

        Msg::ClickFile { id, modifiers } => {
            click_file(&mut model, &mut effects, &id, modifiers);
        }

        Msg::ClickBody => {
            model.pending_restore = None;
            if model.selection.click_body() {
                if model.selection.active_file().is_none() {
                    model.permissions.reset_file(None);
                }
                effects.push(Effect::Changed(ChangeKind::Selection));
                effects.push(Effect::Changed(ChangeKind::Actions));
            }
        }

        Msg::OpenFile { id } => {
            if model.selection.in_trash() {
                debug!("Ignoring open of trash item {}", id);
                return (model, effects);
            }
            if !click_file(&mut model, &mut effects, &id, Modifiers::NONE) {
                return (model, effects);
            }
            if let Some(file) = model.selection.active_file() {
                effects.push(Effect::OpenFile {
                    path: file.path.clone(),
                    mode: OpenMode::Run,
                });
            }
        }

        Msg::ToggleFolder { path } => {
            if model.tree.is_expanded(&path) {
                collapse(&mut model, &mut effects, &path);
            } else {
                expand(&mut model, &mut effects, &path);
            }
        }

        Msg::ExpandFolder { path } => expand(&mut model, &mut effects, &path),

        Msg::CollapseFolder { path } => collapse(&mut model, &mut effects, &path),

        Msg::Refresh => {
            effects.push(Effect::FireHostEvent(HostEvent::RefreshBrowsePerspective {
                show_descriptions: model.context.show_descriptions,
            }));
            model.files.cache.mark_dirty();
            redraw(&mut model, &mut effects);
        }

        Msg::SetShowDescriptions(show) => {
            if model.context.show_descriptions != show {
                model.context.show_descriptions = show;
                effects.push(Effect::Changed(ChangeKind::View));
            }
        }

        Msg::SetShowHidden(show) => set_show_hidden(&mut model, &mut effects, show),

        Msg::ActivateAction { id } => activate_action(&model, &mut effects, id),

        Msg::TreeLoaded { seq, result } => tree_loaded(&mut model, &mut effects, seq, result),

        Msg::SubtreeLoaded { path, result } => subtree_loaded(&mut model, &mut effects, &path, result),

        Msg::ListingLoaded { ticket, path, result } => {
            listing_loaded(&mut model, &mut effects, ticket, &path, result)
        }

        Msg::PermissionLoaded { query, path, result } => {
            if let Err(e) = &result {
                warn!("Permission query {:?} for {} failed: {}", query, path, e);
            }
            let answer = result.as_ref().map_err(|e| e.as_str());
            if model.permissions.apply(query, &path, answer) {
                effects.push(Effect::Changed(ChangeKind::Actions));
            } else {
                debug!("Dropping permission answer {:?} for {}", query, path);
            }
        }

        Msg::ShowHiddenSettingLoaded { result } => match result {
            Ok(show) => set_show_hidden(&mut model, &mut effects, show),
            Err(e) => warn!("Failed to read show-hidden setting: {}", e),
        },

        Msg::ActionFinished { action, result } => match result {
            Ok(()) => {
                info!("{:?} finished, refreshing", action);
                model.files.cache.mark_dirty();
                effects.push(Effect::FireHostEvent(HostEvent::RepositoryDirty));
                redraw(&mut model, &mut effects);
            }
            Err(e) => {
                warn!("{:?} failed: {}", action, e);
                model.last_error = Some(format!("{} failed: {}", action.label(), e));
                effects.push(Effect::Changed(ChangeKind::View));
            }
        },

        Msg::MarkCacheDirty => {
            debug!("Listing cache marked dirty");
            model.files.cache.mark_dirty();
        }

        Msg::FavoritesChanged => {
            model.selection.touch_file();
            request_permissions(&model, &mut effects);
            effects.push(Effect::Changed(ChangeKind::Selection));
            effects.push(Effect::Changed(ChangeKind::Actions));
        }
    }

    (model, effects)
}

/// Snapshot the selection and reload the tree from the root
fn redraw(model: &mut Model, effects: &mut Vec<Effect>) {
    if model.selection.active_folder().is_some() {
        model.pending_restore = Some(model.selection.snapshot());
    }

    let seq = model.tree.sequence.issue();
    model.tree.loading = true;
    model.tree.expanding.clear();

    debug!("Fetching tree (seq {})", seq);
    effects.push(Effect::FetchTree {
        seq,
        path: ROOT_PATH.to_string(),
        depth: model.context.tree_depth,
        show_hidden: model.context.show_hidden,
    });
    effects.push(Effect::Changed(ChangeKind::View));
}

fn tree_loaded(model: &mut Model, effects: &mut Vec<Effect>, seq: u64, result: Result<RepositoryFileTreeDto, String>) {
    if !model.tree.sequence.is_current(seq) {
        debug!("Dropping stale tree response (seq {}, current {})", seq, model.tree.sequence.current());
        return;
    }
    model.tree.loading = false;

    let dto = match result {
        Ok(dto) => dto,
        Err(e) => {
            warn!("Tree load failed: {}", e);
            model.last_error = Some(e);
            effects.push(Effect::Changed(ChangeKind::View));
            return;
        }
    };

    let root = tree::build_root(&dto, model.context.collator.as_ref(), &model.context.trash_label);
    model.tree.root = Some(root);
    model.last_error = None;
    reconcile_expanded(model, effects);
    effects.push(Effect::Changed(ChangeKind::Tree));

    let snapshot = model.pending_restore.take();
    let Some(folder) = choose_folder(model, snapshot.as_ref()) else {
        debug!("Tree has no folders to select");
        if model.selection.clear() {
            effects.push(Effect::Changed(ChangeKind::Selection));
        }
        return;
    };

    // Keep the snapshot only if its file lives in the folder being restored
    model.pending_restore = snapshot.filter(|snap| {
        snap.folder_path.as_deref() == Some(folder.path.as_str())
            && matches!(snap.last_click, ClickKind::File | ClickKind::TrashItem)
            && snap.file_id.is_some()
    });

    model.tree.reveal(&folder.path);
    activate_folder(model, effects, folder);
}

/// Match the expanded set to a freshly built tree: forget folders that are
/// gone, and reload children the new tree does not carry
fn reconcile_expanded(model: &mut Model, effects: &mut Vec<Effect>) {
    let expanded = std::mem::take(&mut model.tree.expanded);
    for path in expanded {
        let Some(folder) = model.tree.folder(&path) else {
            debug!("Forgetting expanded folder {}: not in tree", path);
            continue;
        };
        if !tree::is_expandable(folder) {
            continue;
        }
        if !folder.children_loaded && model.tree.expanding.insert(path.clone()) {
            debug!("Reloading children of {}", path);
            effects.push(Effect::FetchSubtree {
                path: path.clone(),
                show_hidden: model.context.show_hidden,
            });
        }
        model.tree.expanded.insert(path);
    }
}

/// Previously clicked folder, else the start folder, else the first one
fn choose_folder(model: &Model, snapshot: Option<&SelectionSnapshot>) -> Option<RepoNode> {
    let previous = snapshot.and_then(|s| s.folder_path.as_deref());
    let start = model
        .start_folder
        .as_deref()
        .unwrap_or(model.context.home_folder.as_str());

    previous
        .and_then(|path| model.tree.folder(path))
        .or_else(|| model.tree.folder(start))
        .or_else(|| model.tree.root.as_ref().and_then(tree::first_visible_folder))
        .map(|folder| folder.node.clone())
}

fn activate_folder(model: &mut Model, effects: &mut Vec<Effect>, folder: RepoNode) {
    let path = folder.path.clone();
    model.selection.select_folder(folder);
    effects.push(Effect::Changed(ChangeKind::Selection));

    model.permissions.reset_folder(Some(&path));
    model.permissions.reset_file(None);
    request_permissions(model, effects);

    load_listing(model, effects, &path);
    effects.push(Effect::Changed(ChangeKind::Actions));
}

/// Issue the permission queries for the active folder and file
fn request_permissions(model: &Model, effects: &mut Vec<Effect>) {
    if let Some(folder) = model.selection.active_folder() {
        if !folder.is_trash() {
            for query in [
                PermissionQuery::FolderDownload,
                PermissionQuery::FolderUpload,
                PermissionQuery::FolderAccess,
            ] {
                effects.push(Effect::CheckPermission {
                    query,
                    path: folder.path.clone(),
                });
            }
        }
    }

    request_permissions_for_file(model, effects);
}

fn load_listing(model: &mut Model, effects: &mut Vec<Effect>, path: &str) {
    let plan = model.files.cache.plan(path, model.files.listing.as_ref());
    let ticket = RequestTicket {
        seq: model.files.sequence.issue(),
        generation: model.files.cache.generation(),
    };

    match plan {
        ListingPlan::Reuse => {
            debug!("Listing cache hit for {}, unchanged", path);
            model.files.loading = false;
            let listing = model.files.listing.clone().unwrap_or_default();
            model.files.show(path, listing);
            listing_shown(model, effects, path, true);
        }
        ListingPlan::ApplyCachedAndRefresh(cached) => {
            debug!("Listing cache hit for {}, refreshing", path);
            let changed = model.files.show(path, cached);
            listing_shown(model, effects, path, changed);
            fetch_listing(model, effects, ticket, path);
        }
        ListingPlan::Fetch => {
            debug!("Listing cache miss for {}", path);
            fetch_listing(model, effects, ticket, path);
        }
    }
}

fn fetch_listing(model: &mut Model, effects: &mut Vec<Effect>, ticket: RequestTicket, path: &str) {
    model.files.loading = true;
    effects.push(Effect::FetchListing {
        ticket,
        path: path.to_string(),
        show_hidden: model.context.show_hidden,
    });
}

fn listing_loaded(
    model: &mut Model,
    effects: &mut Vec<Effect>,
    ticket: RequestTicket,
    path: &str,
    result: Result<RepositoryFileListDto, String>,
) {
    let current = model.files.sequence.is_current(ticket.seq);

    let dto = match result {
        Ok(dto) => dto,
        Err(e) => {
            if current {
                warn!("Listing load for {} failed: {}", path, e);
                model.files.loading = false;
                model.last_error = Some(e);
                effects.push(Effect::Changed(ChangeKind::View));
            }
            return;
        }
    };

    let listing = if is_trash(path) {
        reformat_trash_listing(&dto, &model.context.origin_label)
    } else {
        reformat_listing(&dto)
    };

    // Superseded responses still refresh the cache for next time
    if !model.files.cache.insert(path, listing.clone(), ticket.generation) {
        debug!("Not caching {}: cache was cleared after the request", path);
    }

    if !current {
        debug!(
            "Dropping stale listing for {} (seq {}, current {})",
            path,
            ticket.seq,
            model.files.sequence.current()
        );
        return;
    }
    if model.active_folder_path() != Some(path) {
        debug!("Dropping listing for {}: no longer active", path);
        return;
    }

    model.files.loading = false;
    model.last_error = None;
    let changed = model.files.show(path, listing);
    listing_shown(model, effects, path, changed);
}

/// Bring selection and trash bookkeeping in line with the listing now on
/// screen for `path`
fn listing_shown(model: &mut Model, effects: &mut Vec<Effect>, path: &str, changed: bool) {
    let listing: Listing = model.files.listing.clone().unwrap_or_default();
    let order = listing.display_order();

    if is_trash(path) {
        model.files.deleted_ids = listing.ids();
    }

    let mut selection_changed = model.selection.retain_listed(&order);

    if let Some(file) = model.selection.active_file() {
        if listing.find(&file.id).is_none() {
            debug!("Selected file {} is gone", file.path);
            selection_changed |= model.selection.drop_file();
            model.permissions.reset_file(None);
        }
    }

    if let Some(snapshot) = model.pending_restore.take() {
        let entry = snapshot
            .file_id
            .as_deref()
            .and_then(|id| listing.find(id))
            .or_else(|| snapshot.file_path.as_deref().and_then(|p| listing.find_by_path(p)));
        match entry {
            Some(entry) => {
                let node = entry.node.clone();
                model.permissions.reset_file(Some(&node.path));
                selection_changed |= model.selection.select_file(node, Modifiers::NONE, &order);
                request_permissions_for_file(model, effects);
            }
            None => {
                debug!("Could not restore file selection in {}", path);
                selection_changed |= model.selection.drop_file();
            }
        }
    }

    if changed {
        effects.push(Effect::Changed(ChangeKind::Listing));
    }
    if selection_changed {
        effects.push(Effect::Changed(ChangeKind::Selection));
    }
    if changed || selection_changed {
        effects.push(Effect::Changed(ChangeKind::Actions));
    }
}

fn request_permissions_for_file(model: &Model, effects: &mut Vec<Effect>) {
    if model.selection.in_trash() {
        return;
    }
    if let Some(file) = model.selection.active_file() {
        effects.push(Effect::CheckPermission {
            query: PermissionQuery::FileAccess,
            path: file.path.clone(),
        });
    }
}

/// Returns whether the click was accepted
fn click_file(model: &mut Model, effects: &mut Vec<Effect>, id: &str, modifiers: Modifiers) -> bool {
    let Some(listing) = model.active_listing() else {
        debug!("Ignoring file click: listing is not for the active folder");
        return false;
    };
    let Some(entry) = listing.find(id) else {
        debug!("Ignoring click on unknown file {}", id);
        return false;
    };
    let node = entry.node.clone();
    let order = listing.display_order();

    model.pending_restore = None;
    if model.selection.select_file(node.clone(), modifiers, &order) {
        effects.push(Effect::Changed(ChangeKind::Selection));
    }

    model.permissions.reset_file(Some(&node.path));
    request_permissions_for_file(model, effects);
    effects.push(Effect::Changed(ChangeKind::Actions));
    true
}

fn expand(model: &mut Model, effects: &mut Vec<Effect>, path: &str) {
    let Some(folder) = model.tree.folder(path) else {
        return;
    };
    if !tree::is_expandable(folder) {
        return;
    }
    let needs_load = !folder.children_loaded;

    if needs_load && model.tree.expanding.insert(path.to_string()) {
        debug!("Loading children of {}", path);
        effects.push(Effect::FetchSubtree {
            path: path.to_string(),
            show_hidden: model.context.show_hidden,
        });
    }
    if model.tree.expanded.insert(path.to_string()) {
        effects.push(Effect::Changed(ChangeKind::Tree));
    }
}

fn collapse(model: &mut Model, effects: &mut Vec<Effect>, path: &str) {
    if model.tree.expanded.remove(path) {
        effects.push(Effect::Changed(ChangeKind::Tree));
    }
}

fn subtree_loaded(model: &mut Model, effects: &mut Vec<Effect>, path: &str, result: Result<RepositoryFileTreeDto, String>) {
    if !model.tree.expanding.remove(path) {
        debug!("Dropping subtree for {}: not expanding", path);
        return;
    }

    match result {
        Ok(dto) => {
            let collator = model.context.collator.clone();
            let grafted = model
                .tree
                .root
                .as_mut()
                .map(|root| tree::graft_children(root, path, &dto, collator.as_ref()))
                .unwrap_or(false);
            if grafted {
                effects.push(Effect::Changed(ChangeKind::Tree));
            }
        }
        Err(e) => {
            warn!("Loading children of {} failed: {}", path, e);
            model.tree.expanded.remove(path);
            model.last_error = Some(e);
            effects.push(Effect::Changed(ChangeKind::Tree));
        }
    }
}

fn set_show_hidden(model: &mut Model, effects: &mut Vec<Effect>, show: bool) {
    if model.context.show_hidden == show {
        return;
    }
    info!("Show hidden files: {}", show);
    model.context.show_hidden = show;
    model.files.cache.mark_dirty();
    redraw(model, effects);
}

fn activate_action(model: &Model, effects: &mut Vec<Effect>, id: ActionId) {
    let Some(set) = present_actions(&ActionContext::from_model(model)) else {
        return;
    };
    let Some(button) = set.button(id) else {
        debug!("{:?} is not available for the current selection", id);
        return;
    };
    if !button.enabled {
        debug!("{:?} is disabled", id);
        return;
    }

    let open_mode = match id {
        ActionId::Open => Some(OpenMode::Run),
        ActionId::OpenInNewWindow => Some(OpenMode::NewWindow),
        ActionId::RunInBackground => Some(OpenMode::Background),
        ActionId::DownloadFile | ActionId::DownloadFolder => Some(OpenMode::Download),
        _ => None,
    };

    match (open_mode, &button.target) {
        (Some(mode), ActionTarget::File(node) | ActionTarget::Folder(node)) => {
            effects.push(Effect::OpenFile {
                path: node.path.clone(),
                mode,
            });
        }
        _ => effects.push(Effect::InvokeAction {
            action: id,
            target: button.target.clone(),
        }),
    }
}
