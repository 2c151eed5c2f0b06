use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::descriptor::server::Server;
use crate::dialect::SpecVersion;
use crate::error::ConfigError;

/// Top-level project configuration loaded from `.lma.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LmaConfig {
    pub default_version: SpecVersion,
    pub document: DocumentConfig,
    pub server: ServerConfig,
}

/// Knobs that change the generated document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Prefix of every path template, without a trailing slash.
    pub api_prefix: String,
    /// Component name of the shared error schema.
    pub error_schema: String,
    pub servers: Vec<Server>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            error_schema: DEFAULT_ERROR_SCHEMA.to_string(),
            servers: Vec::new(),
        }
    }
}

/// Settings for `lma serve`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the documentation viewer's static assets.
    pub ui_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ui_dir: PathBuf::from("openapi-ui"),
        }
    }
}

pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_ERROR_SCHEMA: &str = "Error";
pub const DEFAULT_PORT: u16 = 3001;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".lma.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<LmaConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LmaConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# lma configuration
default_version: "3.1"   # "3.0" | "3.1", served at /openapi.json

document:
  api_prefix: /api
  error_schema: Error     # e.g. GenericError
  servers: []
    # - url: http://localhost:3001
    #   description: Local development

server:
  port: 3001
  ui_dir: openapi-ui      # static assets for the documentation viewer
"#
}
