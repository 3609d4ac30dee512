use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::debug;

use repobrowse::api::{RepoClient, RepositoryFileListDto, RepositoryFileTreeDto};
use repobrowse::cache::RequestTicket;
use repobrowse::logic::actions::ActionId;
use repobrowse::model::{PermissionAnswer, PermissionQuery};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (navigation, trash operations)
    Medium, // Permission checks for the current selection
    Low,    // Settings and background refreshes
}

/// Identifies requests that supersede each other while still queued
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Tree,
    Subtree { path: String },
    Listing,
    Permission { query: PermissionQuery },
    ShowHiddenSetting,
    Write { id: u64 },
}

/// Repository-changing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryWrite {
    /// Move to trash
    Delete,
    Restore,
    /// Permanent delete, also used to empty the trash
    Purge,
}

#[derive(Debug, Clone)]
pub enum ApiRequest {
    GetTree {
        seq: u64,
        path: String,
        depth: u32,
        show_hidden: bool,
    },

    /// Depth-1 load for expanding a folder
    GetSubtree { path: String, show_hidden: bool },

    GetListing {
        ticket: RequestTicket,
        path: String,
        show_hidden: bool,
    },

    CheckPermission { query: PermissionQuery, path: String },

    GetShowHiddenSetting,

    Write {
        action: ActionId,
        write: RepositoryWrite,
        ids: Vec<String>,
    },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::CheckPermission { .. } => Priority::Medium,
            ApiRequest::GetShowHiddenSetting => Priority::Low,
            _ => Priority::High,
        }
    }

    fn key(&self, write_id: u64) -> RequestKey {
        match self {
            ApiRequest::GetTree { .. } => RequestKey::Tree,
            ApiRequest::GetSubtree { path, .. } => RequestKey::Subtree { path: path.clone() },
            ApiRequest::GetListing { .. } => RequestKey::Listing,
            ApiRequest::CheckPermission { query, .. } => RequestKey::Permission { query: *query },
            ApiRequest::GetShowHiddenSetting => RequestKey::ShowHiddenSetting,
            // Writes never supersede each other
            ApiRequest::Write { .. } => RequestKey::Write { id: write_id },
        }
    }
}

#[derive(Debug)]
pub enum ApiResponse {
    TreeResult {
        seq: u64,
        tree: Result<RepositoryFileTreeDto, anyhow::Error>,
    },

    SubtreeResult {
        path: String,
        tree: Result<RepositoryFileTreeDto, anyhow::Error>,
    },

    ListingResult {
        ticket: RequestTicket,
        path: String,
        files: Result<RepositoryFileListDto, anyhow::Error>,
    },

    PermissionResult {
        query: PermissionQuery,
        path: String,
        answer: Result<PermissionAnswer, anyhow::Error>,
    },

    ShowHiddenSettingResult {
        show_hidden: Result<bool, anyhow::Error>,
    },

    WriteResult {
        action: ActionId,
        result: Result<(), anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub enum InternalMessage {
    Completed,
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: RepoClient,
    request_queue: VecDeque<(ApiRequest, Priority, RequestKey)>,
    in_flight: usize,
    next_write_id: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: RepoClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: 0,
            next_write_id: 0,
            response_tx,
            completion_tx,
            max_concurrent: 6,
        }
    }

    /// Add a request to the queue, replacing a queued request it supersedes
    fn enqueue(&mut self, request: ApiRequest) {
        self.next_write_id += 1;
        let key = request.key(self.next_write_id);
        let priority = request.priority();

        let before = self.request_queue.len();
        self.request_queue.retain(|(_, _, queued)| *queued != key);
        if self.request_queue.len() != before {
            debug!("Replaced queued {:?} request", key);
        }

        // High priority goes in front
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p, _)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority, key));
    }

    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return;
        }

        let Some((request, _, _)) = self.request_queue.pop_front() else {
            return;
        };
        self.in_flight += 1;

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed);
        });
    }

    async fn execute_request(client: &RepoClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::GetTree {
                seq,
                path,
                depth,
                show_hidden,
            } => {
                debug!("GET tree {} depth={} (seq {})", path, depth, seq);
                let tree = client.get_tree(&path, depth, show_hidden).await;
                ApiResponse::TreeResult { seq, tree }
            }

            ApiRequest::GetSubtree { path, show_hidden } => {
                debug!("GET subtree {}", path);
                let tree = client.get_tree(&path, 1, show_hidden).await;
                ApiResponse::SubtreeResult { path, tree }
            }

            ApiRequest::GetListing {
                ticket,
                path,
                show_hidden,
            } => {
                debug!("GET listing {} (seq {})", path, ticket.seq);
                let files = client.get_children(&path, show_hidden).await;
                ApiResponse::ListingResult { ticket, path, files }
            }

            ApiRequest::CheckPermission { query, path } => {
                let answer = match query {
                    PermissionQuery::FolderDownload => client.can_download(&path).await.map(PermissionAnswer::Flag),
                    PermissionQuery::FolderUpload => client.can_upload(&path).await.map(PermissionAnswer::Flag),
                    PermissionQuery::FolderAccess | PermissionQuery::FileAccess => client
                        .can_access_map(&path, query.access_permissions())
                        .await
                        .map(PermissionAnswer::Access),
                };
                ApiResponse::PermissionResult { query, path, answer }
            }

            ApiRequest::GetShowHiddenSetting => ApiResponse::ShowHiddenSettingResult {
                show_hidden: client.get_show_hidden_setting().await,
            },

            ApiRequest::Write { action, write, ids } => {
                debug!("PUT {:?} for {} item(s)", write, ids.len());
                let result = match write {
                    RepositoryWrite::Delete => client.delete_files(&ids).await,
                    RepositoryWrite::Restore => client.restore_files(&ids).await,
                    RepositoryWrite::Purge => client.delete_permanently(&ids).await,
                };
                ApiResponse::WriteResult { action, result }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: RepoClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // UI loop is gone
                        None => break,
                    }
                }

                Some(InternalMessage::Completed) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                }

                _ = tick.tick() => {
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
