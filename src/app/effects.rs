use std::collections::HashSet;
use tracing::{debug, info, warn};

use repobrowse::logic::view::view;
use repobrowse::messages::ChangeKind;
use repobrowse::{update, Effect, Model, Msg};

use crate::services::api::ApiRequest;
use crate::services::events::EventOrigin;
use crate::App;

impl App {
    /// Run a message through the reducer and carry out what it asks for
    pub fn dispatch(&mut self, msg: Msg) {
        debug!("dispatch {:?}", msg);

        let placeholder = Model::new(self.model.context.clone());
        let model = std::mem::replace(&mut self.model, placeholder);
        let (model, effects) = update(model, msg);
        self.model = model;

        let mut changes = HashSet::new();
        for effect in effects {
            match effect {
                Effect::Changed(kind) => {
                    changes.insert(kind);
                }
                other => self.run_effect(other),
            }
        }

        self.view = view(&self.model);
        if changes.contains(&ChangeKind::Tree) || changes.contains(&ChangeKind::Selection) {
            self.follow_selection();
        }
        self.clamp_cursors();
    }

    fn send(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            warn!("Request worker is gone; dropping request");
        }
    }

    pub(crate) fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchTree {
                seq,
                path,
                depth,
                show_hidden,
            } => self.send(ApiRequest::GetTree {
                seq,
                path,
                depth,
                show_hidden,
            }),

            Effect::FetchSubtree { path, show_hidden } => {
                self.send(ApiRequest::GetSubtree { path, show_hidden })
            }

            Effect::FetchListing {
                ticket,
                path,
                show_hidden,
            } => self.send(ApiRequest::GetListing {
                ticket,
                path,
                show_hidden,
            }),

            Effect::CheckPermission { query, path } => {
                self.send(ApiRequest::CheckPermission { query, path })
            }

            Effect::FetchShowHiddenSetting => self.send(ApiRequest::GetShowHiddenSetting),

            Effect::OpenFile { path, mode } => self.open_path(&path, mode),

            Effect::FireHostEvent(event) => self.bus.fire(EventOrigin::Browser, event),

            Effect::InvokeAction { action, target } => {
                info!("Invoking {:?}", action);
                self.invoke_action(action, target);
            }

            // Collected by dispatch
            Effect::Changed(_) => {}
        }
    }
}
