use std::process::{Command, Stdio};
use tracing::{debug, warn};

use repobrowse::logic::actions::{ActionId, ActionTarget};
use repobrowse::messages::OpenMode;

use crate::services::api::{ApiRequest, RepositoryWrite};
use crate::App;

/// Repository write behind an action, if it has one
pub fn write_for(action: ActionId) -> Option<RepositoryWrite> {
    match action {
        ActionId::DeleteFile | ActionId::DeleteFolder | ActionId::DeleteSelected => {
            Some(RepositoryWrite::Delete)
        }
        ActionId::Restore => Some(RepositoryWrite::Restore),
        ActionId::PermanentDelete | ActionId::EmptyTrash => Some(RepositoryWrite::Purge),
        _ => None,
    }
}

fn describe_target(target: &ActionTarget) -> String {
    match target {
        ActionTarget::Folder(node) | ActionTarget::File(node) => {
            format!("{} ({})", node.path, node.id)
        }
        ActionTarget::Files(nodes) => format!("{} items", nodes.len()),
        ActionTarget::DeletedItems(ids) => format!("{} deleted items", ids.len()),
    }
}

impl App {
    /// Hand a repository URL for `path` to the configured open command
    pub(crate) fn open_path(&mut self, path: &str, mode: OpenMode) {
        let url = match mode {
            OpenMode::Download => self.client.download_url(path),
            OpenMode::Run | OpenMode::NewWindow => self.client.viewer_url(path),
            OpenMode::Background => {
                self.ui
                    .show_toast("Error: Run in background needs the web console".to_string());
                return;
            }
        };

        let Some(open_cmd) = self.open_command.clone() else {
            self.ui.show_toast(format!("Error: open_command not configured ({})", url));
            return;
        };

        let result = Command::new(&open_cmd)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                debug!("open_command: spawned {} {}", open_cmd, url);
                self.ui.show_toast(format!("Opened: {}", path));
            }
            Err(e) => {
                warn!("Failed to execute open_command '{}': {}", open_cmd, e);
                self.ui
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }

    /// Run an action the reducer approved
    pub(crate) fn invoke_action(&mut self, action: ActionId, target: ActionTarget) {
        if let Some(write) = write_for(action) {
            let ids = target.ids();
            if ids.is_empty() {
                debug!("{:?} has nothing to act on", action);
                return;
            }
            if self
                .api_tx
                .send(ApiRequest::Write { action, write, ids })
                .is_err()
            {
                warn!("Request worker is gone; {:?} not sent", action);
            }
            return;
        }

        match action {
            ActionId::FolderProperties | ActionId::FileProperties => {
                self.ui.show_toast(describe_target(&target));
            }
            _ => {
                self.ui.show_toast(format!(
                    "Error: {} needs the web console",
                    action.label().trim_end_matches("...")
                ));
            }
        }
    }
}
