//! Canonical forms of directive values.
//!
//! Paths are percent-encoded, hosts reduced to an ASCII authority and crawl
//! delays printed in their shortest decimal form.

use std::{borrow::Cow, fmt, net::IpAddr};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Number;
use url::{Host, Url};

use crate::error::{Result, RobotsError};

/// Bytes escaped in `Allow` / `Disallow` paths, in addition to all non-ASCII bytes.
///
/// Matches `encodeURI`: reserved characters such as `/`, `?`, `#`, `*` and `$`
/// stay literal so prefixes, query markers and wildcards keep their meaning.
/// `%` is escaped so decoding always returns the input.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode an `Allow` / `Disallow` path.
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH).into()
}

/// A `Host` directive value: ASCII authority plus the scheme when it is not `http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDirective {
    scheme: Option<String>,
    authority: String,
}

impl HostDirective {
    /// Scheme kept in the output, if any.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Host name with an optional non-default port.
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl fmt::Display for HostDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scheme {
            Some(scheme) => write!(f, "{scheme}://{}", self.authority),
            None => f.write_str(&self.authority),
        }
    }
}

/// Parse and normalize a `host` option.
///
/// Values without a scheme are read as `http`; only `http` and `https` are
/// accepted. Path, query, fragment and credentials are dropped, default
/// ports are elided and international labels come back punycode-encoded.
pub fn parse_host(raw: &str) -> Result<HostDirective> {
    let raw = raw.trim();

    if is_ip_literal(raw) {
        return Err(RobotsError::HostIsIpAddress);
    }

    let with_scheme: Cow<'_, str> = if has_scheme(raw) {
        raw.into()
    } else {
        format!("http://{raw}").into()
    };

    let url = Url::parse(&with_scheme).map_err(|_| RobotsError::InvalidHost)?;

    // Other schemes get opaque, non-punycoded hosts.
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RobotsError::InvalidHost);
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => return Err(RobotsError::HostIsIpAddress),
        _ => return Err(RobotsError::InvalidHost),
    };

    let authority = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    };

    let scheme = (url.scheme() != "http").then(|| url.scheme().to_string());

    Ok(HostDirective { scheme, authority })
}

/// Whether `raw` starts with `scheme://`, where the scheme is a letter
/// followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Bare or bracketed IP address, before any URL parsing.
fn is_ip_literal(raw: &str) -> bool {
    let unbracketed = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(raw);
    unbracketed.parse::<IpAddr>().is_ok()
}

/// A `Crawl-delay` value.
///
/// Integers print without a decimal point and reals print in their shortest
/// form, so `10` stays `10`, `10.0` becomes `10` and `0.5` stays `0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlDelay(Number);

impl CrawlDelay {
    /// Wrap a JSON number.
    pub fn new(seconds: Number) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for CrawlDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_f64() {
            Some(seconds) if self.0.is_f64() => write!(f, "{seconds}"),
            _ => write!(f, "{}", self.0),
        }
    }
}
