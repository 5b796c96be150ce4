use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    /// auto, kitty, sixel, iterm2 or halfblocks
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    /// Browse a photodeck server instead of the local filesystem
    #[serde(default)]
    pub remote_url: Option<String>,
    /// Breadcrumb name of the root folder when browsing a server
    #[serde(default = "default_root_label")]
    pub root_label: String,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_server_root")]
    pub root: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_root_label() -> String {
    "public".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_server_root() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            root: default_server_root(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            image_preview_enabled: default_true(),
            image_protocol: default_image_protocol(),
            remote_url: None,
            root_label: default_root_label(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }
}
