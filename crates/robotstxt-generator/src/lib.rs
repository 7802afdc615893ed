//! robotstxt Generator Library
//!
//! Validation, normalization and serialization engine for robots.txt files.
//!
//! # Modules
//!
//! - [`validate`] - Option validation, first violation wins
//! - [`normalize`] - Path percent-encoding, host and crawl-delay normalization
//! - [`robots`] - robots.txt serialization and the engine entry point
//!
//! # Example
//!
//! ```
//! use robotstxt_core::FileSource;
//! use robotstxt_generator::generate_robotstxt;
//! use serde_json::json;
//!
//! let options = json!({
//!     "policy": [{ "userAgent": "Google", "allow": "/", "crawlDelay": 0.5 }]
//! });
//! let text = generate_robotstxt(&options, &FileSource).unwrap();
//! assert_eq!(text, "User-agent: Google\nAllow: /\nCrawl-delay: 0.5\n");
//! ```

pub mod error;
pub mod normalize;
pub mod robots;
pub mod validate;

pub use error::{CLEAN_PARAM_MAX_LEN, Result, RobotsError};
pub use normalize::{CrawlDelay, HostDirective};
pub use robots::{RobotsGenerator, generate_robotstxt, resolve_options};
pub use validate::{ValidPolicy, ValidatedOptions, validate};
