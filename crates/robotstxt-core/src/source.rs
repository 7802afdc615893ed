//! Configuration sources.
//!
//! The generator never reads files itself. When options name a
//! `configFile`, it asks a [`ConfigSource`] for the object stored there.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CoreError, Result};

/// Something that can turn a path into a plain configuration object.
pub trait ConfigSource {
    /// Load the configuration object stored at `path`.
    fn load(&self, path: &Path) -> Result<Value>;
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Unknown extensions are read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Parse `content` in this format into a plain object.
    pub fn parse(self, content: &str) -> Result<Value> {
        let value: Value = match self {
            Self::Toml => toml::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(value)
    }
}

/// Reads configuration files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl ConfigSource for FileSource {
    fn load(&self, path: &Path) -> Result<Value> {
        if !path.exists() {
            return Err(CoreError::not_found(path));
        }

        let format = ConfigFormat::from_path(path);
        info!(path = %path.display(), ?format, "loading robots configuration");

        let content = std::fs::read_to_string(path)?;
        let value = format.parse(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        // A YAML document holding only `~` parses to null; treat it like an empty table.
        if value.is_null() {
            debug!(path = %path.display(), "configuration file is empty");
            return Ok(Value::Object(serde_json::Map::new()));
        }

        Ok(value)
    }
}
