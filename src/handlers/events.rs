//! Host Event Handler
//!
//! Maps events from the rest of the console to browser messages.

use tracing::debug;

use repobrowse::messages::HostEvent;
use repobrowse::Msg;

use crate::services::events::{Envelope, EventOrigin};
use crate::App;

/// Map an event from elsewhere in the console to a browser message
pub fn to_msg(envelope: &Envelope) -> Option<Msg> {
    if envelope.origin == EventOrigin::Browser {
        return None;
    }
    match envelope.event {
        HostEvent::RepositoryDirty => Some(Msg::MarkCacheDirty),
        HostEvent::FavoritesChanged => Some(Msg::FavoritesChanged),
        HostEvent::RefreshBrowsePerspective { .. } => Some(Msg::Refresh),
    }
}

pub fn handle_host_event(app: &mut App, envelope: Envelope) {
    let Some(msg) = to_msg(&envelope) else {
        return;
    };
    debug!("Host event {:?} -> {:?}", envelope.event, msg);
    app.dispatch(msg);
}
