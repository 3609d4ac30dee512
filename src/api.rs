use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::logic::path::{encode_path_component, TRASH_PATH};

/// A single file or folder entry as returned by the repository service.
///
/// The service serializes booleans either as JSON booleans or as the
/// strings `"true"`/`"false"` depending on the server version, so every
/// flag goes through [`deserialize_flag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFileDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub folder: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub hidden: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub locked: bool,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    #[serde(default)]
    pub deleted_date: Option<String>,
    #[serde(default)]
    pub original_parent_folder_path: Option<String>,
}

/// Folder subtree returned by the `/tree` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryFileTreeDto {
    #[serde(default)]
    pub file: RepositoryFileDto,
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub children: Vec<RepositoryFileTreeDto>,
}

/// Flat listing returned by the `/children` and `/deleted` endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryFileListDto {
    #[serde(
        default,
        rename = "repositoryFileDto",
        deserialize_with = "deserialize_one_or_many"
    )]
    pub files: Vec<RepositoryFileDto>,
}

#[derive(Debug, Clone, Deserialize)]
struct AccessSetting {
    name: String,
    #[serde(deserialize_with = "deserialize_flag")]
    value: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AccessMapResponse {
    Settings {
        #[serde(deserialize_with = "deserialize_one_or_many")]
        setting: Vec<AccessSetting>,
    },
    Plain(HashMap<String, serde_json::Value>),
}

/// Repository permission codes understood by `canAccessMap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl Permission {
    pub fn code(&self) -> u8 {
        match self {
            Permission::Read => 0,
            Permission::Write => 1,
            Permission::Delete => 2,
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(Permission::Read),
            "1" => Some(Permission::Write),
            "2" => Some(Permission::Delete),
            _ => None,
        }
    }

    /// Query string value for a set of permissions, e.g. `1|2`
    pub fn mask(permissions: &[Permission]) -> String {
        permissions
            .iter()
            .map(|p| p.code().to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Parsed `canAccessMap` answer. Permissions missing from the map are denied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessMap(HashMap<Permission, bool>);

impl AccessMap {
    pub fn from_pairs(pairs: &[(Permission, bool)]) -> Self {
        Self(pairs.iter().copied().collect())
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.0.get(&permission).copied().unwrap_or(false)
    }

    /// Parse either the `{"setting": [{name, value}]}` form or a plain object
    pub fn parse(body: &str) -> Result<Self> {
        let response: AccessMapResponse =
            serde_json::from_str(body).context("Failed to parse access map")?;

        let mut map = HashMap::new();
        match response {
            AccessMapResponse::Settings { setting } => {
                for entry in setting {
                    if let Some(permission) = Permission::from_code(&entry.name) {
                        map.insert(permission, entry.value);
                    }
                }
            }
            AccessMapResponse::Plain(values) => {
                for (name, value) in values {
                    let Some(permission) = Permission::from_code(&name) else {
                        continue;
                    };
                    let allowed = match value {
                        serde_json::Value::Bool(b) => b,
                        serde_json::Value::String(s) => s.eq_ignore_ascii_case("true"),
                        _ => false,
                    };
                    map.insert(permission, allowed);
                }
            }
        }

        Ok(Self(map))
    }
}

/// Accepts `true`, `"true"`, `"TRUE"`; everything else (including null) is false
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// The service collapses single-element arrays into a bare object and
/// omits empty ones, so accept null, one object, or a list.
fn deserialize_one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    let opt = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(match opt {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// `"true"` (any case, surrounding whitespace allowed) is the only yes
pub fn parse_boolean_body(body: &str) -> bool {
    body.trim().trim_matches('"').eq_ignore_ascii_case("true")
}

#[derive(Clone)]
pub struct RepoClient {
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    client: Client,
}

impl RepoClient {
    pub fn new(base_url: String, username: Option<String>, password: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        // Endpoint paths are appended without a leading slash
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            base_url,
            username,
            password,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tree_url(&self, path: &str, depth: u32, show_hidden: bool) -> String {
        format!(
            "{}api/repo/files/{}/tree?depth={}&showHidden={}&filter=*%7CFOLDERS",
            self.base_url,
            encode_path_component(path),
            depth,
            show_hidden
        )
    }

    pub fn children_url(&self, path: &str, show_hidden: bool) -> String {
        if path == TRASH_PATH {
            return format!("{}api/repo/files/deleted", self.base_url);
        }
        format!(
            "{}api/repo/files/{}/children?showHidden={}&filter=*%7CFILES",
            self.base_url,
            encode_path_component(path),
            show_hidden
        )
    }

    pub fn access_map_url(&self, path: &str, permissions: &[Permission]) -> String {
        format!(
            "{}api/repo/files/{}/canAccessMap?permissions={}",
            self.base_url,
            encode_path_component(path),
            urlencoding::encode(&Permission::mask(permissions))
        )
    }

    /// URL that renders a file in the browser
    pub fn viewer_url(&self, path: &str) -> String {
        format!(
            "{}api/repos/{}/generatedContent",
            self.base_url,
            encode_path_component(path)
        )
    }

    pub fn download_url(&self, path: &str) -> String {
        format!(
            "{}api/repo/files/{}/download",
            self.base_url,
            encode_path_component(path)
        )
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/json")
            // Some deployments cache GETs aggressively
            .header("Cache-Control", "no-cache");
        match &self.username {
            Some(user) => request.basic_auth(user, self.password.as_deref()),
            None => request,
        }
    }

    fn put(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        let request = self
            .client
            .put(url)
            .header("Content-Type", "text/plain")
            .body(body);
        match &self.username {
            Some(user) => request.basic_auth(user, self.password.as_deref()),
            None => request,
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;

        let body = response.text().await.context("Failed to read response body")?;
        Ok(body)
    }

    pub async fn get_tree(&self, path: &str, depth: u32, show_hidden: bool) -> Result<RepositoryFileTreeDto> {
        let body = self.get_text(&self.tree_url(path, depth, show_hidden)).await?;
        if body.trim().is_empty() {
            return Ok(RepositoryFileTreeDto::default());
        }
        let tree = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse folder tree for {}", path))?;
        Ok(tree)
    }

    pub async fn get_children(&self, path: &str, show_hidden: bool) -> Result<RepositoryFileListDto> {
        let body = self.get_text(&self.children_url(path, show_hidden)).await?;
        parse_file_list(&body).with_context(|| format!("Failed to parse listing for {}", path))
    }

    pub async fn can_download(&self, dir_path: &str) -> Result<bool> {
        let url = format!(
            "{}api/repo/files/canDownload?dirPath={}",
            self.base_url,
            urlencoding::encode(dir_path)
        );
        Ok(parse_boolean_body(&self.get_text(&url).await?))
    }

    pub async fn can_upload(&self, dir_path: &str) -> Result<bool> {
        let url = format!(
            "{}api/repo/files/canUpload?dirPath={}",
            self.base_url,
            urlencoding::encode(dir_path)
        );
        Ok(parse_boolean_body(&self.get_text(&url).await?))
    }

    pub async fn can_access_map(&self, path: &str, permissions: &[Permission]) -> Result<AccessMap> {
        let body = self.get_text(&self.access_map_url(path, permissions)).await?;
        AccessMap::parse(&body)
    }

    /// Reads the `MANTLE_SHOW_HIDDEN_FILES` user setting
    pub async fn get_show_hidden_setting(&self) -> Result<bool> {
        let url = format!("{}api/user-settings/MANTLE_SHOW_HIDDEN_FILES", self.base_url);
        Ok(parse_boolean_body(&self.get_text(&url).await?))
    }

    async fn put_ids(&self, endpoint: &str, ids: &[String]) -> Result<()> {
        let url = format!("{}api/repo/files/{}", self.base_url, endpoint);
        self.put(&url, join_ids(ids))
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?;
        Ok(())
    }

    /// Move files to the trash
    pub async fn delete_files(&self, ids: &[String]) -> Result<()> {
        self.put_ids("delete", ids).await
    }

    pub async fn restore_files(&self, ids: &[String]) -> Result<()> {
        self.put_ids("restore", ids).await
    }

    pub async fn delete_permanently(&self, ids: &[String]) -> Result<()> {
        self.put_ids("deletepermanent", ids).await
    }
}

/// Comma-terminated id list, the format the file endpoints expect
pub fn join_ids(ids: &[String]) -> String {
    ids.iter().map(|id| format!("{},", id)).collect()
}

fn parse_file_list(body: &str) -> Result<RepositoryFileListDto> {
    if body.trim().is_empty() || body.trim() == "null" {
        return Ok(RepositoryFileListDto::default());
    }
    Ok(serde_json::from_str(body)?)
}
