//! Generation errors.

use robotstxt_core::CoreError;
use thiserror::Error;

/// Longest `Clean-param` value accepted, in characters.
pub const CLEAN_PARAM_MAX_LEN: usize = 500;

/// Robots generation errors.
///
/// Every validation variant aborts generation; the message names the
/// offending option so it reads well in build logs.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// The options are neither an object nor absent.
    #[error("Options must be an object")]
    InvalidOptionsType,

    /// `policy` is present but not a list.
    #[error("Options `policy` must be array")]
    InvalidPolicyType,

    /// A policy lacks a usable `userAgent`.
    #[error("Each `policy` should have single string `userAgent` option")]
    MissingUserAgent,

    /// `host` is present but not a single string.
    #[error("Options `host` must be `string` and single")]
    InvalidHostType,

    /// `host` does not parse as a host authority.
    #[error("Option `host` does not contain correct host")]
    InvalidHost,

    /// `host` is an IPv4 or IPv6 literal.
    #[error("Options `host` should be not IP address")]
    HostIsIpAddress,

    /// `crawlDelay` is not numeric.
    #[error("Option `crawlDelay` must be integer or float")]
    InvalidCrawlDelay,

    /// `cleanParam` is neither a string nor a list.
    #[error("Option `cleanParam` should be string or array")]
    InvalidCleanParamType,

    /// A `cleanParam` list entry is not a string.
    #[error("String in `cleanParam` option should be string")]
    InvalidCleanParamEntryType,

    /// A single-string `cleanParam` exceeds the length limit.
    #[error("Option `cleanParam` should be less or equal 500 characters")]
    CleanParamTooLong,

    /// A `cleanParam` list entry exceeds the length limit.
    #[error("String in `cleanParam` option should be less or equal 500 characters")]
    CleanParamEntryTooLong,

    /// `allow`, `disallow` or `sitemap` is neither a string nor a list of strings.
    #[error("Option `{option}` should be string or array of strings")]
    InvalidDirectiveType {
        /// Name of the offending option.
        option: &'static str,
    },

    /// A value written verbatim into the file holds a line break or other
    /// control character.
    #[error("Option `{option}` must not contain control characters")]
    ControlCharacter {
        /// Name of the offending option.
        option: &'static str,
    },

    /// `configFile` is present but not a path string.
    #[error("Option `configFile` must be a path string")]
    InvalidConfigFileType,

    /// Loading the referenced configuration file failed.
    #[error("config error: {0}")]
    Config(#[from] CoreError),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;
