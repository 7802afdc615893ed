//! Robots.txt generation.
//!
//! Turns validated options into the text of a robots.txt file.

use std::path::Path;

use robotstxt_core::{ConfigSource, RobotsOptions};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    error::{Result, RobotsError},
    normalize::encode_path,
    validate::{ValidPolicy, ValidatedOptions, validate},
};

/// Robots.txt generator.
#[derive(Debug, Clone)]
pub struct RobotsGenerator {
    options: ValidatedOptions,
}

impl RobotsGenerator {
    /// Create a generator from typed options.
    ///
    /// A `config_file` is loaded through `source` and merged the same way
    /// [`generate_robotstxt`] does.
    pub fn new(options: &RobotsOptions, source: &dyn ConfigSource) -> Result<Self> {
        Self::from_value(&resolve_options(&options.to_value()?, source)?)
    }

    /// Create a generator from a plain configuration object.
    pub fn from_value(options: &Value) -> Result<Self> {
        Ok(Self {
            options: validate(options)?,
        })
    }

    /// The validated options this generator serializes.
    pub fn options(&self) -> &ValidatedOptions {
        &self.options
    }

    /// Generate robots.txt.
    ///
    /// Policy blocks are separated by one blank line, followed by `Sitemap`
    /// and `Host`. Every line ends with `\n`.
    #[must_use]
    pub fn generate(&self) -> String {
        let permissive;
        let policies = match &self.options.policies {
            Some(policies) => policies.as_slice(),
            None => {
                permissive = [ValidPolicy::permissive()];
                &permissive[..]
            }
        };

        debug!(policies = policies.len(), "generating robots.txt");

        let mut out = String::new();

        for (index, policy) in policies.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            write_policy(&mut out, policy);
        }

        for sitemap in &self.options.sitemaps {
            push_line(&mut out, "Sitemap", sitemap);
        }

        if let Some(host) = &self.options.host {
            push_line(&mut out, "Host", &host.to_string());
        }

        out
    }
}

fn write_policy(out: &mut String, policy: &ValidPolicy) {
    for agent in &policy.user_agents {
        push_line(out, "User-agent", agent);
    }

    for path in &policy.allow {
        push_line(out, "Allow", &encode_path(path));
    }

    for path in &policy.disallow {
        push_line(out, "Disallow", &encode_path(path));
    }

    if let Some(delay) = &policy.crawl_delay {
        push_line(out, "Crawl-delay", &delay.to_string());
    }

    for rule in &policy.clean_params {
        push_line(out, "Clean-param", rule);
    }
}

/// Append `Key: value\n`. An empty value leaves no trailing space.
fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(':');
    if !value.is_empty() {
        out.push(' ');
        out.push_str(value);
    }
    out.push('\n');
}

/// Merge the configuration file named by `configFile` into `options`.
///
/// Keys from the file override keys given explicitly; `configFile` itself is
/// dropped. Options without `configFile` come back unchanged.
pub fn resolve_options(options: &Value, source: &dyn ConfigSource) -> Result<Value> {
    let Some(map) = options.as_object() else {
        return Ok(options.clone());
    };

    let path = match map.get("configFile") {
        None | Some(Value::Null) => return Ok(options.clone()),
        Some(Value::String(path)) => Path::new(path),
        Some(_) => return Err(RobotsError::InvalidConfigFileType),
    };

    info!(path = %path.display(), "loading options from config file");
    let loaded = source.load(path)?;

    let Value::Object(file_options) = loaded else {
        // Let validation report the bad shape.
        return Ok(loaded);
    };

    let mut merged: Map<String, Value> = map
        .iter()
        .filter(|(key, _)| key.as_str() != "configFile")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    merged.extend(file_options);

    Ok(Value::Object(merged))
}

/// Generate robots.txt text from a plain configuration object.
///
/// A `configFile` entry is loaded through `source` and merged first.
pub fn generate_robotstxt(options: &Value, source: &dyn ConfigSource) -> Result<String> {
    let options = resolve_options(options, source)?;
    Ok(RobotsGenerator::from_value(&options)?.generate())
}
