//! API Response Handler
//!
//! Turns responses from the background request worker into browser
//! messages. Transport errors are classified and flattened to strings
//! here so the core only ever sees display-ready text.

use tracing::warn;

use repobrowse::logic::errors::describe_error;
use repobrowse::Msg;

use crate::services::api::ApiResponse;
use crate::App;

fn flatten<T>(result: Result<T, anyhow::Error>) -> Result<T, String> {
    result.map_err(|e| describe_error(&e))
}

/// Map a worker response to the message the reducer expects
pub fn to_msg(response: ApiResponse) -> Msg {
    match response {
        ApiResponse::TreeResult { seq, tree } => Msg::TreeLoaded {
            seq,
            result: flatten(tree),
        },

        ApiResponse::SubtreeResult { path, tree } => Msg::SubtreeLoaded {
            path,
            result: flatten(tree),
        },

        ApiResponse::ListingResult {
            ticket,
            path,
            files,
        } => Msg::ListingLoaded {
            ticket,
            path,
            result: flatten(files),
        },

        ApiResponse::PermissionResult {
            query,
            path,
            answer,
        } => {
            if let Err(e) = &answer {
                warn!("Permission query {:?} for {} failed: {}", query, path, e);
            }
            Msg::PermissionLoaded {
                query,
                path,
                result: flatten(answer),
            }
        }

        ApiResponse::ShowHiddenSettingResult { show_hidden } => Msg::ShowHiddenSettingLoaded {
            result: flatten(show_hidden),
        },

        ApiResponse::WriteResult { action, result } => Msg::ActionFinished {
            action,
            result: flatten(result),
        },
    }
}

/// Handle API response from background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    if let ApiResponse::WriteResult { action, result: Ok(()) } = &response {
        app.ui.show_toast(format!("{} done", action.label()));
    }
    let msg = to_msg(response);
    app.dispatch(msg);
}
