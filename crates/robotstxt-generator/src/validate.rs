//! Option validation.
//!
//! Checks a plain configuration object and narrows it into
//! [`ValidatedOptions`]. The first violation wins, in this order:
//!
//! 1. `policy` is a list
//! 2. every policy has a `userAgent` without control characters
//! 3. `host` is a single, valid, non-IP host
//! 4. per policy: `allow` / `disallow` shape, then `crawlDelay`
//! 5. per policy: `cleanParam` shape, length and control characters
//! 6. `sitemap` shape and control characters
//!
//! `userAgent`, `cleanParam` and `sitemap` are written verbatim, so a line
//! break in them would inject extra directives. Paths are percent-encoded
//! and need no such check.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{CLEAN_PARAM_MAX_LEN, Result, RobotsError},
    normalize::{CrawlDelay, HostDirective, parse_host},
};

/// Options that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedOptions {
    /// Policy blocks. `None` when the caller configured none.
    pub policies: Option<Vec<ValidPolicy>>,

    /// Sitemap URLs in declaration order.
    pub sitemaps: Vec<String>,

    /// Normalized host.
    pub host: Option<HostDirective>,
}

/// A policy block that passed validation. Every list keeps declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPolicy {
    pub user_agents: Vec<String>,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub crawl_delay: Option<CrawlDelay>,
    pub clean_params: Vec<String>,
}

impl ValidPolicy {
    /// Every agent may crawl everything.
    pub fn permissive() -> Self {
        Self {
            user_agents: vec!["*".to_string()],
            allow: vec!["/".to_string()],
            disallow: Vec::new(),
            crawl_delay: None,
            clean_params: Vec::new(),
        }
    }
}

/// Validate a plain configuration object.
///
/// `null` is treated as an empty object. Unknown keys are ignored.
pub fn validate(options: &Value) -> Result<ValidatedOptions> {
    let options = match options {
        Value::Null => return Ok(ValidatedOptions::default()),
        Value::Object(map) => map,
        _ => return Err(RobotsError::InvalidOptionsType),
    };

    let items = match field(options, "policy") {
        None => None,
        Some(Value::Array(items)) => Some(items),
        Some(_) => return Err(RobotsError::InvalidPolicyType),
    };

    let agents = items
        .into_iter()
        .flatten()
        .map(user_agents)
        .collect::<Result<Vec<_>>>()?;

    let host = match field(options, "host") {
        None => None,
        Some(Value::String(raw)) => Some(parse_host(raw)?),
        Some(_) => return Err(RobotsError::InvalidHostType),
    };

    let policies = match items {
        None => None,
        Some(items) => Some(
            items
                .iter()
                .zip(agents)
                .map(|(item, agents)| policy(item, agents))
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    let sitemaps = string_list(options, "sitemap")?;
    if sitemaps.iter().any(|url| has_control(url)) {
        return Err(RobotsError::ControlCharacter { option: "sitemap" });
    }

    debug!(
        policies = policies.as_ref().map_or(0, Vec::len),
        sitemaps = sitemaps.len(),
        host = host.is_some(),
        "validated robots options"
    );

    Ok(ValidatedOptions {
        policies,
        sitemaps,
        host,
    })
}

/// A key that is present and not `null`.
fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// The `userAgent` entries of one policy: a non-empty string or a non-empty
/// list of non-empty strings.
fn user_agents(item: &Value) -> Result<Vec<String>> {
    let agents = match item.as_object().and_then(|map| field(map, "userAgent")) {
        Some(Value::String(agent)) if !agent.is_empty() => vec![agent.clone()],
        Some(Value::Array(entries)) if !entries.is_empty() => entries
            .iter()
            .map(|entry| match entry {
                Value::String(agent) if !agent.is_empty() => Ok(agent.clone()),
                _ => Err(RobotsError::MissingUserAgent),
            })
            .collect::<Result<Vec<_>>>()?,
        _ => return Err(RobotsError::MissingUserAgent),
    };
    if agents.iter().any(|agent| has_control(agent)) {
        return Err(RobotsError::ControlCharacter { option: "userAgent" });
    }
    Ok(agents)
}

fn policy(item: &Value, user_agents: Vec<String>) -> Result<ValidPolicy> {
    // `user_agents` already rejected non-object items.
    let Some(map) = item.as_object() else {
        return Err(RobotsError::MissingUserAgent);
    };

    let allow = string_list(map, "allow")?;
    let disallow = string_list(map, "disallow")?;

    let crawl_delay = match field(map, "crawlDelay") {
        None => None,
        Some(Value::Number(seconds)) => Some(CrawlDelay::new(seconds.clone())),
        Some(_) => return Err(RobotsError::InvalidCrawlDelay),
    };

    let clean_params = clean_params(map)?;

    Ok(ValidPolicy {
        user_agents,
        allow,
        disallow,
        crawl_delay,
        clean_params,
    })
}

fn clean_params(map: &Map<String, Value>) -> Result<Vec<String>> {
    let rules = match field(map, "cleanParam") {
        None => Ok(Vec::new()),
        Some(Value::String(rule)) => {
            if too_long(rule) {
                return Err(RobotsError::CleanParamTooLong);
            }
            Ok(vec![rule.clone()])
        }
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(rule) if too_long(rule) => Err(RobotsError::CleanParamEntryTooLong),
                Value::String(rule) => Ok(rule.clone()),
                _ => Err(RobotsError::InvalidCleanParamEntryType),
            })
            .collect::<Result<Vec<_>>>(),
        Some(_) => Err(RobotsError::InvalidCleanParamType),
    }?;
    if rules.iter().any(|rule| has_control(rule)) {
        return Err(RobotsError::ControlCharacter { option: "cleanParam" });
    }
    Ok(rules)
}

fn too_long(rule: &str) -> bool {
    rule.chars().count() > CLEAN_PARAM_MAX_LEN
}

fn has_control(value: &str) -> bool {
    value.chars().any(char::is_control)
}

/// A string-or-list option expanded to a list.
fn string_list(map: &Map<String, Value>, option: &'static str) -> Result<Vec<String>> {
    match field(map, option) {
        None => Ok(Vec::new()),
        Some(Value::String(value)) => Ok(vec![value.clone()]),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or(RobotsError::InvalidDirectiveType { option })
            })
            .collect(),
        Some(_) => Err(RobotsError::InvalidDirectiveType { option }),
    }
}
