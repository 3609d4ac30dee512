use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::logic::sorting::NaturalCollator;
use crate::model::{BrowserContext, Capabilities};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server root, e.g. `http://localhost:8080/pentaho/`
    pub base_url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_home_folder")]
    pub home_folder: String,
    #[serde(default = "default_tree_depth")]
    pub tree_depth: u32,
    /// When absent the user setting is read from the server
    #[serde(default)]
    pub show_hidden_files: Option<bool>,
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
    #[serde(default)]
    pub can_download: bool,
    #[serde(default)]
    pub can_publish: bool,
    #[serde(default = "default_true")]
    pub can_read: bool,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command used to open URLs, e.g. `xdg-open` or `open`
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_home_folder() -> String {
    "/".to_string()
}

fn default_tree_depth() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).context("Invalid config file")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&yaml)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            can_download: self.can_download,
            can_publish: self.can_publish,
            can_read: self.can_read,
            can_create: self.can_create,
        }
    }

    pub fn browser_context(&self) -> BrowserContext {
        BrowserContext {
            home_folder: self.home_folder.clone(),
            tree_depth: self.tree_depth.max(1),
            show_hidden: self.show_hidden_files.unwrap_or(false),
            show_descriptions: self.show_descriptions,
            capabilities: self.capabilities(),
            collator: Arc::new(NaturalCollator),
            ..Default::default()
        }
    }
}

/// Locate the config file: `--config`, then the platform config dir, then
/// `./config.yaml`
pub fn find_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("repobrowse").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = dirs::config_dir()
        .map(|dir| dir.join("repobrowse").join("config.yaml").display().to_string())
        .unwrap_or_else(|| "~/.config/repobrowse/config.yaml".to_string());

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}
