//! robotstxt Core Library
//!
//! Configuration types, configuration loading and error handling for the
//! robotstxt generator.

pub mod config;
pub mod error;
pub mod source;

pub use config::{OneOrMany, Policy, RobotsOptions};
pub use error::{CoreError, Result};
pub use source::{ConfigFormat, ConfigSource, FileSource};
