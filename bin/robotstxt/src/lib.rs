//! robotstxt CLI Library
//!
//! This library provides the command implementations for the robotstxt CLI.
//! The binary entry point only parses arguments and dispatches here.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, print, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use robotstxt::cmd;
//!
//! # async fn demo() -> color_eyre::eyre::Result<()> {
//! // Write public/robots.txt from robots.toml
//! let overrides = cmd::Overrides::default();
//! cmd::build::run(Some(Path::new("robots.toml")), Path::new("public/robots.txt"), &overrides)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod cmd;

// Re-export engine types for convenience
pub use robotstxt_core::{FileSource, Policy, RobotsOptions};
pub use robotstxt_generator::{RobotsError, RobotsGenerator, generate_robotstxt};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// robotstxt::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
