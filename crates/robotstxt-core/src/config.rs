//! Typed robots.txt configuration.
//!
//! These types mirror the plain configuration object accepted by the
//! generator. Callers building options in Rust use them directly; callers
//! handing over an arbitrary object (a parsed config file, JSON from a build
//! tool) pass a [`serde_json::Value`] and let the generator validate it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A field that accepts either a single value or an ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An ordered list of values.
    Many(Vec<T>),
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Top-level robots.txt options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsOptions {
    /// Policy blocks, emitted in order. `None` means a single permissive block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<Vec<Policy>>,

    /// Sitemap URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<OneOrMany<String>>,

    /// Preferred host (mirror) of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Configuration file to load and merge over these options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// One block of directives for one or more user agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// User agents this block applies to.
    pub user_agent: OneOrMany<String>,

    /// Allowed path prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<OneOrMany<String>>,

    /// Disallowed path prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow: Option<OneOrMany<String>>,

    /// Crawl delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<f64>,

    /// Yandex `Clean-param` rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_param: Option<OneOrMany<String>>,
}

impl Policy {
    /// Create a policy for the given user agent(s) with no directives.
    pub fn new(user_agent: impl Into<OneOrMany<String>>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow: None,
            disallow: None,
            crawl_delay: None,
            clean_param: None,
        }
    }

    /// Set the `Allow` paths.
    #[must_use]
    pub fn allow(mut self, paths: impl Into<OneOrMany<String>>) -> Self {
        self.allow = Some(paths.into());
        self
    }

    /// Set the `Disallow` paths.
    #[must_use]
    pub fn disallow(mut self, paths: impl Into<OneOrMany<String>>) -> Self {
        self.disallow = Some(paths.into());
        self
    }

    /// Set the crawl delay.
    #[must_use]
    pub fn crawl_delay(mut self, seconds: f64) -> Self {
        self.crawl_delay = Some(seconds);
        self
    }

    /// Set the `Clean-param` rules.
    #[must_use]
    pub fn clean_param(mut self, rules: impl Into<OneOrMany<String>>) -> Self {
        self.clean_param = Some(rules.into());
        self
    }
}

impl RobotsOptions {
    /// Convert into the plain object form consumed by the generator.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::config_with_source("Failed to serialize robots options", e))
    }
}
