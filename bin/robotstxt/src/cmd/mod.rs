//! Command implementations.

pub mod build;
pub mod check;
pub mod print;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use robotstxt_core::FileSource;
use robotstxt_generator::{RobotsGenerator, resolve_options};
use serde_json::{Value, json};

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "robots.toml";

/// Values given on the command line that replace the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replacement `host`.
    pub host: Option<String>,
    /// Replacement `sitemap` list; empty keeps the configured one.
    pub sitemaps: Vec<String>,
}

/// Options object naming the configuration file to load.
///
/// Without an explicit path, `robots.toml` is used when it exists and the
/// default options otherwise.
pub fn options_for(config: Option<&Path>) -> Value {
    let path = match config {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => {
            tracing::debug!("no configuration file, using defaults");
            return json!({});
        }
    };

    json!({ "configFile": path.to_string_lossy() })
}

/// Load the configuration and apply command-line overrides.
pub fn load_options(config: Option<&Path>, overrides: &Overrides) -> Result<Value> {
    let mut options = resolve_options(&options_for(config), &FileSource)
        .wrap_err("Failed to load configuration")?;

    if let Value::Object(map) = &mut options {
        if let Some(host) = &overrides.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            map.insert("host".to_string(), json!(host));
        }

        if !overrides.sitemaps.is_empty() {
            tracing::info!(sitemaps = ?overrides.sitemaps, "Overriding sitemaps from CLI");
            map.insert("sitemap".to_string(), json!(overrides.sitemaps));
        }
    }

    Ok(options)
}

/// Load, validate and serialize in one go.
pub fn render(config: Option<&Path>, overrides: &Overrides) -> Result<String> {
    let options = load_options(config, overrides)?;
    tracing::debug!(%options, "Loaded options");

    let generator = RobotsGenerator::from_value(&options).wrap_err("Invalid robots options")?;
    Ok(generator.generate())
}
