//! Settings file (`schemagen.toml`) and environment overrides.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::dialect::RenderOptions;
use crate::error::{ExportError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "schemagen.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Connection URL of the server to introspect.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Database (schema) the exported tables live in.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path`. A missing file yields the defaults unless `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Config> {
        match fs::read_to_string(path) {
            Ok(text) => Config::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// `DATABASE_URL` from the environment wins over the file.
    pub fn apply_env(mut self) -> Config {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.database_url = Some(url);
            }
        }
        self
    }

    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ExportError::Config("database URL not specified".into()))
    }

    /// Database name from the config, or the path segment of the URL.
    pub fn database_name(&self) -> Result<String> {
        if let Some(db) = &self.database {
            return Ok(db.clone());
        }
        self.database_url
            .as_deref()
            .and_then(database_from_url)
            .ok_or_else(|| ExportError::Config("database name not specified".into()))
    }
}

/// `mysql://user@host:3306/shop?ssl-mode=disabled` -> `shop`.
pub fn database_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("://")?;
    let (_, path) = rest.split_once('/')?;
    let name = path.split(['?', '#']).next().unwrap_or_default();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
